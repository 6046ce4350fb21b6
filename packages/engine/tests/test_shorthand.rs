mod common;

use stencil_common::{props, ComponentId, ElementType, PropValue, Props, ResolvedNode};
use stencil_engine::{
    create_factory, CollectingSink, Engine, EngineError, EngineOptions, MappingRule, Resolution,
    Shorthand,
};

fn engine() -> Engine {
    Engine::new(common::registry(), EngineOptions::dev())
}

fn section() -> ComponentId {
    ComponentId::new("BreadcrumbSection")
}

#[test]
fn test_sequence_is_keyed_by_display_text() {
    let engine = engine();
    let factory = engine.factory(&section()).unwrap();

    let sections = vec![
        props! { "text" => "Home" },
        props! { "text" => "Search", "active" => true },
    ];

    let nodes = factory.create(&engine, sections, None).unwrap().into_nodes();

    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].key.as_deref(), Some("Home"));
    assert_eq!(nodes[1].key.as_deref(), Some("Search"));
    assert_eq!(nodes[0].class_name(), Some("section"));
    assert_eq!(nodes[1].class_name(), Some("active section"));
}

#[test]
fn test_primitive_goes_through_mapping_rule() {
    let engine = engine();
    let resolution = engine
        .create_shorthand(&section(), &MappingRule::prop("content"), Shorthand::from("Docs"), None)
        .unwrap();

    let node = resolution.as_node().unwrap();
    assert_eq!(node.element_type, ElementType::tag("div"));
    assert_eq!(node.text_content(), "Docs");
    assert_eq!(node.key.as_deref(), Some("Docs"));
}

#[test]
fn test_explicit_key_is_extracted() {
    let engine = engine();
    let factory = engine.factory(&section()).unwrap();

    let node = factory
        .create(&engine, props! { "key" => "home", "content" => "Home", "link" => true }, None)
        .unwrap();
    let node = node.as_node().unwrap();

    assert_eq!(node.key.as_deref(), Some("home"));
    assert!(!node.props.contains_key("key"));
    assert_eq!(node.element_type, ElementType::tag("a"));
}

#[test]
fn test_node_passes_through_unchanged() {
    let engine = engine();
    let prebuilt = ResolvedNode::element("span").with_text("custom").with_key("x");

    let resolution = engine
        .create_shorthand(
            &section(),
            &MappingRule::prop("content"),
            Shorthand::Node(prebuilt.clone()),
            Some(&props! { "active" => true }),
        )
        .unwrap();

    assert_eq!(resolution, Resolution::Node(prebuilt));
}

#[test]
fn test_absent_yields_nothing() {
    let engine = engine();
    let factory = engine.factory(&section()).unwrap();

    assert!(factory.create(&engine, Shorthand::Absent, None).unwrap().is_absent());
    assert!(factory
        .create_value(&engine, PropValue::Null, Some(props! { "active" => true }))
        .unwrap()
        .is_absent());
}

#[test]
fn test_defaults_sit_under_explicit_values() {
    let engine = engine();
    let factory = create_factory("Label", MappingRule::prop("content"));

    let node = factory
        .create(
            &engine,
            props! { "content" => "2", "color" => "red", "className" => "floating" },
            Some(props! { "color" => "blue", "basic" => true, "className" => "left" }),
        )
        .unwrap();
    let node = node.as_node().unwrap();

    assert_eq!(node.class_name(), Some("ui red basic label left floating"));
    assert_eq!(node.text_content(), "2");
}

#[test]
fn test_second_keyless_item_is_an_error() {
    let engine = engine();
    let factory = engine.factory(&section()).unwrap();

    let items = vec![props! { "active" => true }, props! { "link" => true }];
    let err = factory.create(&engine, items, None).unwrap_err();

    assert_eq!(
        err,
        EngineError::MissingKey {
            component: "BreadcrumbSection".to_string(),
            index: 1
        }
    );
}

#[test]
fn test_single_keyless_item_is_allowed() {
    let engine = engine();
    let factory = engine.factory(&section()).unwrap();

    let items = vec![props! { "active" => true }, props! { "content" => "Search" }];
    let nodes = factory.create(&engine, items, None).unwrap().into_nodes();

    assert_eq!(nodes[0].key, None);
    assert_eq!(nodes[1].key.as_deref(), Some("Search"));
}

#[test]
fn test_flag_keys_are_not_identities() {
    let engine = engine();
    let factory = engine.factory(&section()).unwrap();

    let items = vec![
        props! { "key" => false, "content" => "Home" },
        props! { "key" => true, "content" => "Search" },
    ];
    let nodes = factory.create(&engine, items, None).unwrap().into_nodes();
    assert_eq!(nodes[0].key.as_deref(), Some("Home"));
    assert_eq!(nodes[1].key.as_deref(), Some("Search"));

    let items = vec![props! { "key" => false, "active" => true }, props! { "key" => true }];
    let err = factory.create(&engine, items, None).unwrap_err();
    assert!(matches!(err, EngineError::MissingKey { index: 1, .. }));

    let node = engine
        .instantiate(&section(), props! { "key" => true, "content" => "Docs" })
        .unwrap();
    assert_eq!(node.key, None);
}

#[test]
fn test_duplicate_keys_are_rejected() {
    let engine = engine();
    let factory = engine.factory(&section()).unwrap();

    let err = factory.create(&engine, vec!["Home", "Home"], None).unwrap_err();
    assert!(matches!(err, EngineError::DuplicateKey { key, .. } if key == "Home"));
}

#[test]
fn test_nested_sequences_are_flattened_in_order() {
    let engine = engine();
    let factory = engine.factory(&section()).unwrap();

    let value = PropValue::from(vec![
        PropValue::from("a"),
        PropValue::from(vec![PropValue::from("b"), PropValue::from("c")]),
        PropValue::Null,
        PropValue::from("d"),
    ]);
    let keys: Vec<_> = factory
        .create_value(&engine, value, None)
        .unwrap()
        .into_nodes()
        .into_iter()
        .filter_map(|node| node.key)
        .collect();

    assert_eq!(keys, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_handler_shorthand_is_unsupported() {
    let engine = engine();
    let factory = engine.factory(&section()).unwrap();

    let err = factory
        .create_value(&engine, PropValue::handler("onSelect"), None)
        .unwrap_err();
    assert!(matches!(err, EngineError::UnsupportedShorthandType { kind, .. } if kind == "handler"));
}

#[test]
fn test_component_without_rule_has_no_factory() {
    let engine = engine();
    let err = engine.factory(&ComponentId::new("Button")).unwrap_err();
    assert!(matches!(err, EngineError::NoShorthandRule { name } if name == "Button"));

    let err = engine.factory(&ComponentId::new("Dropdown")).unwrap_err();
    assert!(matches!(err, EngineError::UnknownComponent { .. }));
}

#[test]
fn test_nested_create_from_render() {
    let engine = engine();
    let node = engine
        .instantiate(&ComponentId::new("Button"), props! { "content" => "Like", "label" => "2,048" })
        .unwrap();

    assert_eq!(node.element_type, ElementType::tag("div"));
    let label = node.child_nodes().next().unwrap();
    assert_eq!(label.class_name(), Some("ui basic label"));
    assert_eq!(label.text_content(), "2,048");
    assert_eq!(node.text_content(), "Like2,048");
}

#[test]
fn test_violations_are_reported_in_dev_mode() {
    let sink = CollectingSink::new();
    let engine = Engine::new(common::registry(), EngineOptions::dev()).with_sink(sink.clone());

    let props = props! { "href" => "/", "link" => true, "active" => "yes" };
    engine.instantiate(&section(), props.clone()).unwrap();

    let mut reported: Vec<_> = sink.errors().into_iter().map(|e| e.property_name).collect();
    reported.sort();
    assert_eq!(reported, vec!["active", "href", "link"]);

    let quiet = CollectingSink::new();
    let engine = Engine::new(common::registry(), EngineOptions::production()).with_sink(quiet.clone());
    engine.instantiate(&section(), props).unwrap();
    assert!(quiet.is_empty());
}

#[test]
fn test_validation_never_blocks_rendering() {
    let engine = Engine::new(common::registry(), EngineOptions::dev()).with_sink(CollectingSink::new());
    let node = engine
        .instantiate(&ComponentId::new("Label"), props! { "color" => "mauve", "content" => "x" })
        .unwrap();
    assert_eq!(node.class_name(), Some("ui mauve label"));
}

#[test]
fn test_engine_validate_ignores_dev_mode() {
    let engine = Engine::new(common::registry(), EngineOptions::production());
    let errors = engine
        .validate(&ComponentId::new("Button"), &props! { "children" => "x", "content" => "y" })
        .unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].property_name, "children");
    assert!(errors[0].message.contains("`content`"));
    assert!(engine.validate(&ComponentId::new("Button"), &Props::new()).unwrap().is_empty());
}
