mod common;

use bakeoff_engine::{run_chain_steps, run_prompt_chain, ChainOutcome};
use common::ScriptedAgent;

#[tokio::test]
async fn second_prompt_embeds_first_reply() {
    let caller = ScriptedAgent::new("OpenAI gpt-4o-mini", "OpenAI")
        .reply("idea-1")
        .reply("central-feature-1");

    let result = run_prompt_chain(&caller).await.unwrap();

    assert_eq!(result, "central-feature-1");
    let prompts = caller.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("most promising idea in edTech b2c"));
    assert!(prompts[0].contains("2025 in France"));
    assert!(prompts[1].contains("I want to do this application : idea-1"));
}

#[tokio::test]
async fn first_reply_is_embedded_verbatim() {
    let idea = "  A tutoring marketplace\nwith \"quotes\" and trailing space ";
    let caller = ScriptedAgent::new("caller", "Test").reply(idea).reply("done");

    run_prompt_chain(&caller).await.unwrap();

    let expected = format!("I want to do this application : {idea}");
    assert!(caller.prompts()[1].contains(&expected));
}

#[tokio::test]
async fn empty_first_reply_still_makes_second_call() {
    let caller = ScriptedAgent::new("caller", "Test").reply("").reply("feature");

    let result = run_prompt_chain(&caller).await.unwrap();

    assert_eq!(result, "feature");
    assert_eq!(caller.calls(), 2);
    assert!(caller.prompts()[1].starts_with("I want to do this application : ."));
}

#[tokio::test]
async fn first_call_failure_stops_the_chain() {
    let caller = ScriptedAgent::new("caller", "Test").fail("rate limited").reply("unused");

    let err = run_prompt_chain(&caller).await.unwrap_err();

    assert!(err.to_string().contains("rate limited"));
    assert_eq!(caller.calls(), 1);
}

#[tokio::test]
async fn second_call_failure_propagates() {
    let caller = ScriptedAgent::new("caller", "Test").reply("idea").fail("server error");

    let err = run_prompt_chain(&caller).await.unwrap_err();

    assert!(err.to_string().contains("server error"));
    assert_eq!(caller.calls(), 2);
}

#[tokio::test]
async fn chain_steps_keep_both_replies() {
    let caller = ScriptedAgent::new("caller", "Test").reply("idea-1").reply("central-feature-1");

    let outcome = run_chain_steps(&caller).await.unwrap();

    assert_eq!(
        outcome,
        ChainOutcome {
            idea: "idea-1".into(),
            feature: "central-feature-1".into(),
        }
    );
    assert_eq!(caller.calls(), 2);
}
