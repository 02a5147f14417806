//! End-to-end scenarios exercising the full chain surface.

use std::cell::Cell;

use whence::prelude::*;

#[test]
fn unmatched_subject_takes_the_fallback() {
    let label = when(3).is(1, "one").is(2, "two").otherwise(|| "other");
    assert_eq!(label, "other");
}

#[test]
fn matched_subject_skips_earlier_and_later_producers() {
    let one_calls = Cell::new(0);

    let label = when(2)
        .matches(eq(1), || {
            one_calls.set(one_calls.get() + 1);
            "one"
        })
        .is(2, "two")
        .otherwise(|| "other");

    assert_eq!(label, "two");
    assert_eq!(one_calls.get(), 0);
}

// A state-machine-style reducer: the outer chain keys on state, the inner
// chain keys on action. Unknown combinations fall back to the original state.
fn transition(state: &'static str, action: &'static str) -> &'static str {
    when(state)
        .matches(eq("loading"), || {
            when(action)
                .is("resolve", "success")
                .is("reject", "failure")
                .otherwise(|| state)
        })
        .matches(eq("idle"), || {
            when(action).is("start", "loading").otherwise(|| state)
        })
        .otherwise(|| state)
}

#[test]
fn state_machine_transitions() {
    assert_eq!(transition("loading", "resolve"), "success");
    assert_eq!(transition("loading", "reject"), "failure");
    assert_eq!(transition("idle", "start"), "loading");
    assert_eq!(transition("idle", "resolve"), "idle"); // no-op fallback
    assert_eq!(transition("success", "start"), "success");
}

#[test]
fn status_code_classification() {
    let classify = |status: u16| {
        when(status)
            .matches(between(200, 299), || "success")
            .matches(between(300, 399), || "redirect")
            .any_of(
                [&eq(408_u16) as &dyn Fn(&u16) -> bool, &eq(429), &ge(500)],
                || "retryable",
            )
            .matches(between(400, 499), || "client error")
            .otherwise(|| "unknown")
    };

    assert_eq!(classify(204), "success");
    assert_eq!(classify(301), "redirect");
    assert_eq!(classify(429), "retryable");
    assert_eq!(classify(503), "retryable");
    assert_eq!(classify(404), "client error");
    assert_eq!(classify(42), "unknown");
}

#[test]
fn all_of_combines_conditions_on_one_arm() {
    let fizzbuzz = |n: i32| {
        when(n)
            .all_of(
                [
                    &(|v: &i32| v % 3 == 0) as &dyn Fn(&i32) -> bool,
                    &|v: &i32| v % 5 == 0,
                ],
                || "fizzbuzz".to_string(),
            )
            .matches(|v| v % 3 == 0, || "fizz".to_string())
            .matches(|v| v % 5 == 0, || "buzz".to_string())
            .otherwise(|| n.to_string())
    };

    assert_eq!(fizzbuzz(15), "fizzbuzz");
    assert_eq!(fizzbuzz(9), "fizz");
    assert_eq!(fizzbuzz(10), "buzz");
    assert_eq!(fizzbuzz(7), "7");
}

#[test]
fn erased_subjects_narrow_through_guards() {
    let render = |subject: Subject| {
        when(subject)
            .narrows(Subject::into_str, |s| format!("text:{s}"))
            .narrows(Subject::into_int, |n| format!("number:{n}"))
            .matches(Subject::is_null, || "nothing".to_string())
            .otherwise(|| "opaque".to_string())
    };

    assert_eq!(render(Subject::from("hi")), "text:hi");
    assert_eq!(render(Subject::from(7)), "number:7");
    assert_eq!(render(Subject::Null), "nothing");
    assert_eq!(render(Subject::from(true)), "opaque");
}

#[test]
fn cases_table_reuses_one_rule_set_across_subjects() {
    let classify = Cases::new()
        .case(matching(r"^/api/").unwrap(), |_| "api")
        .case(matching(r"\.(css|js|png)$").unwrap(), |_| "asset")
        .otherwise(|_| "page");

    assert_eq!(classify.evaluate(&"/api/users"), Some("api"));
    assert_eq!(classify.evaluate(&"/app.js"), Some("asset"));
    assert_eq!(classify.evaluate(&"/about"), Some("page"));
    assert_eq!(classify.evaluate(&"/api/users"), Some("api"));
}

#[test]
fn resolve_leaves_the_miss_to_the_caller() {
    let hit: Option<&str> = when(1).is(1, "one").resolve();
    let miss: Option<&str> = when(3).is(1, "one").resolve();
    assert_eq!(hit, Some("one"));
    assert_eq!(miss, None);
}

#[test]
fn exhaustive_is_never_reached_when_conditions_cover_every_case() {
    fn describe(flag: bool) -> &'static str {
        when(flag)
            .is(true, "on")
            .is(false, "off")
            .otherwise(|| exhaustive(flag))
    }

    assert_eq!(describe(true), "on");
    assert_eq!(describe(false), "off");
}

#[test]
fn exhaustive_panic_message_renders_the_stray_value() {
    let err = std::panic::catch_unwind(|| {
        when(3_u8).is(1, "one").otherwise(|| exhaustive(3_u8))
    })
    .unwrap_err();

    let message = err
        .downcast_ref::<String>()
        .expect("panic payload should be a formatted String");
    assert!(message.contains("unhandled case reached"));
    assert!(message.contains('3'));
}
