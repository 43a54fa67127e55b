//! Integration tests for the validate-once pipeline contract

use formvet::testing::CountingEngine;
use formvet::{
    assert_invalid, assert_valid, BuiltinEngine, FieldMap, Form, FormConfig, Locale,
    RenderOptions, Rule,
};

fn data(pairs: &[(&str, &str)]) -> FieldMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn counting_form(config: FormConfig, input: FieldMap) -> Form<CountingEngine<BuiltinEngine>> {
    Form::new(config, CountingEngine::new(BuiltinEngine::default()), input)
}

#[test]
fn pipeline_runs_exactly_once_for_any_accessor_order() {
    let config = FormConfig::builder()
        .pre_filter("name", ["trim"])
        .rule("name", Rule::new("required"))
        .build();
    let form = counting_form(config, data(&[("name", " bob ")]));

    // Hammer every accessor repeatedly, in mixed order.
    for _ in 0..3 {
        form.errors().unwrap();
        form.is_valid().unwrap();
        form.validated().unwrap();
        form.readable_errors(&RenderOptions::default()).unwrap();
    }

    assert_eq!(form.engine().validate_calls(), 1);
    // One pre-filter pass; the empty post-filter spec never reaches the engine.
    assert_eq!(form.engine().filter_calls(), 1);
}

#[test]
fn non_empty_post_filters_cost_exactly_one_more_filter_pass() {
    let config = FormConfig::builder()
        .pre_filter("name", ["trim"])
        .rule("name", Rule::new("required"))
        .post_filter("name", ["upper_case"])
        .build();
    let form = counting_form(config, data(&[("name", " bob ")]));

    assert_valid!(form);
    assert_eq!(form.engine().filter_calls(), 2);
    assert_eq!(form.validated().unwrap()["name"], "BOB");
}

#[test]
fn empty_post_filters_leave_validated_data_as_the_rules_saw_it() {
    let config = FormConfig::builder()
        .pre_filter("name", ["trim"])
        .rule("name", Rule::new("required"))
        .build();
    let form = counting_form(config, data(&[("name", " bob ")]));

    assert_eq!(form.validated().unwrap()["name"], "bob");
    assert_eq!(form.engine().filter_calls(), 1);
}

#[test]
fn validity_and_error_list_always_agree() {
    for (value, expect_valid) in [("bob@example.com", true), ("not-an-email", false)] {
        let config = FormConfig::builder()
            .rule("email", Rule::new("valid_email"))
            .build();
        let form = Form::new(config, BuiltinEngine::default(), data(&[("email", value)]));

        assert_eq!(form.is_valid().unwrap(), expect_valid);
        assert_eq!(form.errors().unwrap().is_empty(), expect_valid);
    }
}

#[test]
fn rule_failure_surfaces_one_record_per_violation() {
    let config = FormConfig::builder()
        .rule("email", Rule::new("valid_email"))
        .build();
    let form = Form::new(
        config,
        BuiltinEngine::default(),
        data(&[("email", "not-an-email")]),
    );

    assert_invalid!(form);
    let errors = form.errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "email");
    assert_eq!(errors[0].rule, "valid_email");
    assert_eq!(errors[0].value, "not-an-email");
}

#[test]
fn all_fields_are_checked_despite_earlier_failures() {
    let config = FormConfig::builder()
        .rule("email", Rule::new("valid_email"))
        .rule("name", Rule::new("required"))
        .rule("age", Rule::new("integer"))
        .build();
    let form = Form::new(
        config,
        BuiltinEngine::default(),
        data(&[("email", "nope"), ("age", "abc")]),
    );

    let errors = form.errors().unwrap();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, ["email", "name", "age"]);
}

#[test]
fn sanitize_toggle_changes_downstream_validated_output() {
    let config = FormConfig::builder()
        .rule("bio", Rule::new("required"))
        .build();
    let input = data(&[("bio", "<b>hello</b>")]);

    let sanitized = Form::new(config.clone(), BuiltinEngine::default(), input.clone());
    let raw = Form::without_sanitize(config, BuiltinEngine::default(), input);

    assert_eq!(sanitized.validated().unwrap()["bio"], "hello");
    assert_eq!(raw.validated().unwrap()["bio"], "<b>hello</b>");
}

#[test]
fn unknown_filter_fails_the_triggering_accessor() {
    let config = FormConfig::builder()
        .pre_filter("name", ["definitely_not_a_filter"])
        .build();
    let form = Form::new(config, BuiltinEngine::default(), data(&[("name", "bob")]));

    let err = form.is_valid().unwrap_err();
    assert_eq!(err.to_string(), "unknown filter: \"definitely_not_a_filter\"");
}

#[test]
fn unknown_rule_never_silently_passes() {
    let config = FormConfig::builder()
        .rule("name", Rule::new("definitely_not_a_rule"))
        .build();
    let form = Form::new(config, BuiltinEngine::default(), data(&[("name", "bob")]));

    assert!(form.validated().is_err());
    assert!(form.readable_errors(&RenderOptions::default()).is_err());
}

#[test]
fn readable_errors_as_first_accessor_renders_the_run() {
    let config = FormConfig::builder()
        .locale(Locale::PtBr)
        .rule("nome", Rule::new("required"))
        .build();
    let form = counting_form(config, FieldMap::new());

    let rendered = form.readable_errors(&RenderOptions::default()).unwrap();
    let map = rendered.as_per_field().unwrap();
    assert_eq!(map["nome"], "O campo Nome é obrigatório");
    assert_eq!(form.engine().validate_calls(), 1);
    assert_eq!(form.engine().render_calls(), 1);
}

#[test]
fn readable_errors_string_form_carries_class_hooks() {
    let config = FormConfig::builder()
        .locale(Locale::En)
        .rule("email", Rule::new("valid_email"))
        .build();
    let form = Form::new(
        config,
        BuiltinEngine::new(Locale::En),
        data(&[("email", "nope")]),
    );

    let opts = RenderOptions::as_string()
        .field_class("form-field")
        .error_class("form-error");
    let text = form.readable_errors(&opts).unwrap();
    let text = text.as_text().unwrap();
    assert!(text.contains("class=\"form-field\""));
    assert!(text.contains("class=\"form-error\""));
}

#[test]
fn validated_is_readable_while_invalid() {
    let config = FormConfig::builder()
        .pre_filter("name", ["trim"])
        .rule("name", Rule::with_param("min_len", "5"))
        .rule("email", Rule::new("valid_email"))
        .build();
    let form = Form::new(
        config,
        BuiltinEngine::default(),
        data(&[("name", " bob "), ("email", "ok@example.com")]),
    );

    assert_invalid!(form);
    // Partial, filtered values remain inspectable.
    let validated = form.validated().unwrap();
    assert_eq!(validated["name"], "bob");
    assert_eq!(validated["email"], "ok@example.com");
}
