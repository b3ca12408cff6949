mod harness;

use std::collections::BTreeMap;

use charforge::{
    AppError, Character, CharacterFieldGenerator, ChatMessage, CoreField, GenerationRequest,
    MainContextEntry, MinijinjaTemplateRenderer, OutputFormat, PromptTemplate, Role, Session,
    WorldInfoEntry, builtin_preset,
};
use harness::StubHost;
use proptest::prelude::*;

fn request(main_context: Vec<MainContextEntry>) -> GenerationRequest {
    GenerationRequest {
        profile_id: "main".into(),
        prompt: "Grim but kind".into(),
        build_options: Default::default(),
        session: Session::new(),
        all_characters: vec![Character::named("Ayla"), Character::named("Bren")],
        lorebooks: BTreeMap::new(),
        prompts: BTreeMap::new(),
        format_description: String::new(),
        main_context,
        max_response_tokens: 200,
        target_field: "personality".into(),
        output_format: OutputFormat::None,
    }
}

fn generator(host: StubHost) -> CharacterFieldGenerator<StubHost, MinijinjaTemplateRenderer> {
    CharacterFieldGenerator::new(host, MinijinjaTemplateRenderer::new())
}

fn role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::System), Just(Role::User), Just(Role::Assistant)]
}

proptest! {
    #[test]
    fn chat_history_only_recipe_returns_base_prompt(
        history in prop::collection::vec((role(), ".{0,40}"), 0..8)
    ) {
        let history: Vec<ChatMessage> =
            history.into_iter().map(|(role, content)| ChatMessage::new(role, content)).collect();
        let generator = generator(StubHost::with_history(history.clone()));
        let request = request(vec![MainContextEntry::new("chatHistory", Role::User)]);

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let messages = runtime.block_on(generator.assemble(&request)).unwrap();

        prop_assert_eq!(messages, history);
    }
}

#[tokio::test]
async fn missing_templates_emit_nothing_and_processing_continues() {
    let mut request = request(vec![
        MainContextEntry::new("nope", Role::System),
        MainContextEntry::new("task", Role::User),
        MainContextEntry::new("also_missing", Role::Assistant),
    ]);
    request.prompts.insert("task".into(), PromptTemplate::new("Task", "{{ target_field }}"));

    let messages = generator(StubHost::default()).assemble(&request).await.unwrap();

    assert_eq!(messages, vec![ChatMessage::new(Role::User, "personality")]);
}

#[tokio::test]
async fn literal_placeholders_survive_unconditional_substitution() {
    let mut request = request(vec![MainContextEntry::new("task", Role::System)]);
    request.prompts.insert(
        "task".into(),
        PromptTemplate::new("Task", "{{ char }} greets {{ user }}; {{ user_instructions }}"),
    );
    request.prompt = "quote: {{user}}".into();

    let messages = generator(StubHost::default()).assemble(&request).await.unwrap();

    // The raw user prompt is substituted before rendering; rendered tokens are protected.
    assert_eq!(messages[0].content, "{{char}} greets {{user}}; quote: USER");
}

#[tokio::test]
async fn persona_names_are_used_when_the_host_has_them() {
    let mut request = request(vec![MainContextEntry::new("task", Role::System)]);
    request.prompts.insert("task".into(), PromptTemplate::new("Task", "{{ char }} & {{ user }}"));
    let host = StubHost { names: Some(("Alex".into(), "Mira".into())), ..StubHost::default() };

    let messages = generator(host).assemble(&request).await.unwrap();

    assert_eq!(messages[0].content, "Mira & Alex");
}

#[tokio::test]
async fn lorebook_and_character_selection_rules() {
    let mut request = request(vec![MainContextEntry::new("ctx", Role::System)]);
    request.prompts.insert(
        "ctx".into(),
        PromptTemplate::new(
            "Context",
            "{{ characters|length }}|{% for world, entries in lorebooks|items %}{{ world }}:{% for e in entries %}{{ e.content }}{% endfor %};{% endfor %}",
        ),
    );
    request.session.selected_character_indexes = vec!["2".into(), "0".into()];
    request.session.selected_world_names =
        ["Mixed", "AllDisabled"].into_iter().map(String::from).collect();
    request.lorebooks = BTreeMap::from([
        (
            "Mixed".to_string(),
            vec![WorldInfoEntry::new("off", "OFF").disabled(), WorldInfoEntry::new("on", "ON")],
        ),
        ("AllDisabled".to_string(), vec![WorldInfoEntry::new("x", "X").disabled()]),
        ("Unselected".to_string(), vec![WorldInfoEntry::new("y", "Y")]),
    ]);

    let messages = generator(StubHost::default()).assemble(&request).await.unwrap();

    assert_eq!(messages[0].content, "1|Mixed:ON;");
}

#[tokio::test]
async fn empty_profile_fails_before_any_dispatch() {
    let host = StubHost::default();
    let generator = generator(host.clone());
    let mut request = request(vec![]);
    request.profile_id = String::new();

    let result = generator.run_character_field_generation(&request).await;

    assert!(matches!(result, Err(AppError::Configuration(_))));
    assert_eq!(host.dispatch_count(), 0);
}

#[tokio::test]
async fn json_generation_returns_the_field_value() {
    let host = StubHost { response: r#"{"description": "A tall warrior"}"#.into(), ..StubHost::default() };
    let mut request = request(vec![MainContextEntry::new("chatHistory", Role::System)]);
    request.target_field = "description".into();
    request.output_format = OutputFormat::Json;

    let value = generator(host.clone()).run_character_field_generation(&request).await.unwrap();

    assert_eq!(value, "A tall warrior");
    assert_eq!(host.dispatch_count(), 1);
}

#[tokio::test]
async fn malformed_json_generation_is_a_parse_error() {
    let host = StubHost { response: r#"{"description": A tall warrior}"#.into(), ..StubHost::default() };
    let mut request = request(vec![]);
    request.target_field = "description".into();
    request.output_format = OutputFormat::Json;

    let result = generator(host).run_character_field_generation(&request).await;

    assert!(matches!(result, Err(AppError::ResponseParse { .. })));
}

#[tokio::test]
async fn builtin_preset_renders_a_complete_prompt() {
    let preset = builtin_preset().unwrap();
    let mut session = Session::new();
    session.field_mut(CoreField::Name).value = "Mira".into();
    session.field_mut(CoreField::Personality).prompt = "Three traits at most".into();
    session.selected_character_indexes = vec!["1".into()];
    let request = GenerationRequest {
        prompts: preset.prompts.clone(),
        main_context: preset.main_context.clone(),
        format_description: preset.format_instructions(OutputFormat::Xml),
        output_format: OutputFormat::Xml,
        session,
        ..request(vec![])
    };
    let host = StubHost::with_history(vec![ChatMessage::new(Role::Assistant, "Earlier reply")]);

    let messages = generator(host).assemble(&request).await.unwrap();

    let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![Role::System, Role::Assistant, Role::System, Role::System, Role::User]
    );
    assert!(messages[2].content.contains("### Bren"));
    assert!(messages[3].content.contains("### Name\nMira"));
    let task = &messages[4].content;
    assert!(task.contains("\"personality\" field"));
    assert!(task.contains("as {{char}} and to the user as {{user}}"));
    assert!(task.contains("Field guidance: Three traits at most"));
    assert!(task.contains("Writer's instructions: Grim but kind"));
    assert!(task.contains("XML element"));
}
