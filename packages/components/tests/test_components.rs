use stencil_common::{props, Child, ComponentId, ElementType, PropValue, Props, ResolvedNode};
use stencil_engine::{CollectingSink, Engine, EngineOptions};

fn engine() -> Engine {
    stencil_components::engine(EngineOptions::production()).expect("Failed to build registry")
}

fn render(name: &str, props: Props) -> ResolvedNode {
    engine()
        .instantiate(&ComponentId::new(name), props)
        .expect("Render failed")
}

fn classes(node: &ResolvedNode) -> Vec<Option<&str>> {
    node.child_nodes().map(ResolvedNode::class_name).collect()
}

#[test]
fn test_registry_holds_every_component() {
    let engine = engine();
    let registry = engine.registry();

    assert_eq!(registry.len(), 22);
    let card_parts: Vec<_> = registry.children_of("Card").into_iter().map(|d| d.name()).collect();
    assert_eq!(
        card_parts,
        vec!["CardContent", "CardDescription", "CardGroup", "CardHeader", "CardMeta"]
    );
}

#[test]
fn test_button_content() {
    let node = render("Button", props! { "content" => "Follow", "primary" => true });

    assert_eq!(node.element_type, ElementType::tag("button"));
    assert_eq!(node.class_name(), Some("ui primary button"));
    assert_eq!(node.children, vec![Child::Text("Follow".to_string())]);
    assert!(!node.props.contains_key("tabIndex"));
}

#[test]
fn test_button_with_label() {
    let node = render(
        "Button",
        props! { "content" => "Like", "icon" => "heart", "label" => "2,048" },
    );

    assert_eq!(node.element_type, ElementType::tag("div"));
    assert_eq!(node.class_name(), Some("ui labeled button"));
    assert_eq!(classes(&node), vec![Some("ui button"), Some("ui left pointing basic label")]);

    let button = node.child_nodes().next().unwrap();
    assert_eq!(button.element_type, ElementType::tag("button"));
    assert_eq!(classes(button), vec![Some("heart icon")]);
    assert_eq!(button.text_content(), "Like");
    assert_eq!(node.text_content(), "Like2,048");
}

#[test]
fn test_button_label_on_the_left() {
    let node = render(
        "Button",
        props! { "content" => "Like", "label" => "2,048", "labelPosition" => "left" },
    );

    assert_eq!(node.class_name(), Some("ui left labeled button"));
    assert_eq!(
        classes(&node),
        vec![Some("ui right pointing basic label"), Some("ui button")]
    );
}

#[test]
fn test_button_attached_renders_focusable_div() {
    let node = render("Button", props! { "attached" => "top", "content" => "Top" });

    assert_eq!(node.element_type, ElementType::tag("div"));
    assert_eq!(node.class_name(), Some("ui top attached button"));
    assert_eq!(node.props.get("tabIndex"), Some(&PropValue::from(0)));
}

#[test]
fn test_icon_button() {
    let node = render("Button", props! { "icon" => "cloud" });

    assert_eq!(node.class_name(), Some("ui icon button"));
    assert_eq!(classes(&node), vec![Some("cloud icon")]);
}

#[test]
fn test_button_forwards_unknown_props() {
    let node = render(
        "Button",
        props! { "content" => "Go", "data-testid" => "go", "onClick" => PropValue::handler("go") },
    );

    assert_eq!(node.props.get_str("data-testid"), Some("go"));
    assert_eq!(node.props.get("onClick"), Some(&PropValue::handler("go")));
}

#[test]
fn test_image_renders_img_by_default() {
    let node = render("Image", props! { "src" => "/logo.png", "size" => "small" });

    assert_eq!(node.element_type, ElementType::tag("img"));
    assert_eq!(node.class_name(), Some("ui small image"));
    assert_eq!(node.props.get_str("src"), Some("/logo.png"));
    assert!(node.children.is_empty());
}

#[test]
fn test_wrapped_image() {
    let node = render("Image", props! { "src" => "/logo.png", "wrapped" => true, "ui" => false });

    assert_eq!(node.element_type, ElementType::tag("div"));
    assert_eq!(node.class_name(), Some("image"));
    let img = node.child_nodes().next().unwrap();
    assert_eq!(img.element_type, ElementType::tag("img"));
    assert_eq!(img.props.get_str("src"), Some("/logo.png"));
}

#[test]
fn test_image_shorthand_maps_to_src() {
    let engine = engine();
    let factory = engine.factory(&ComponentId::new("Image")).unwrap();
    let node = factory.create(&engine, "/avatar.jpg", None).unwrap();
    let node = node.as_node().unwrap();

    assert_eq!(node.props.get_str("src"), Some("/avatar.jpg"));
    assert_eq!(node.key.as_deref(), Some("/avatar.jpg"));
}

#[test]
fn test_card_from_shorthand_props() {
    let node = render(
        "Card",
        props! {
            "header" => "Elliot",
            "meta" => "Friend",
            "description" => "Elliot is a musician",
            "extra" => "22 friends",
        },
    );

    assert_eq!(node.element_type, ElementType::tag("div"));
    assert_eq!(node.class_name(), Some("ui card"));
    assert_eq!(classes(&node), vec![Some("content"), Some("extra content")]);

    let content = node.child_nodes().next().unwrap();
    assert_eq!(classes(content), vec![Some("header"), Some("meta"), Some("description")]);
    assert_eq!(content.text_content(), "ElliotFriendElliot is a musician");
    assert_eq!(node.text_content(), "ElliotFriendElliot is a musician22 friends");
}

#[test]
fn test_clickable_card_is_a_link() {
    let node = render(
        "Card",
        props! { "onClick" => PropValue::handler("open"), "raised" => true },
    );

    assert_eq!(node.element_type, ElementType::tag("a"));
    assert_eq!(node.class_name(), Some("ui raised card"));
    assert_eq!(node.props.get("onClick"), Some(&PropValue::handler("open")));
}

#[test]
fn test_card_group_items() {
    let node = render(
        "CardGroup",
        props! {
            "itemsPerRow" => 3,
            "items" => vec![
                props! { "header" => "Project A" },
                props! { "header" => "Project B", "description" => "Second" },
            ],
        },
    );

    assert_eq!(node.class_name(), Some("ui three cards"));
    let keys: Vec<_> = node.child_nodes().map(|card| card.key.as_deref()).collect();
    assert_eq!(keys, vec![Some("Project A-"), Some("Project B-Second")]);
}

#[test]
fn test_breadcrumb_sections() {
    let sections = vec![
        props! { "text" => "Home", "link" => true },
        props! { "text" => "Search", "active" => true },
    ];
    let node = render("Breadcrumb", props! { "sections" => sections });

    assert_eq!(node.class_name(), Some("ui breadcrumb"));

    let children: Vec<&ResolvedNode> = node.child_nodes().collect();
    assert_eq!(children.len(), 3);

    assert_eq!(children[0].element_type, ElementType::tag("a"));
    assert_eq!(children[0].key.as_deref(), Some("Home"));
    assert_eq!(children[0].class_name(), Some("section"));

    assert_eq!(children[1].key.as_deref(), Some("Home-divider"));
    assert_eq!(children[1].class_name(), Some("divider"));
    assert_eq!(children[1].text_content(), "/");

    assert_eq!(children[2].element_type, ElementType::tag("div"));
    assert_eq!(children[2].key.as_deref(), Some("Search"));
    assert_eq!(children[2].class_name(), Some("active section"));

    assert_eq!(node.text_content(), "Home/Search");
}

#[test]
fn test_breadcrumb_icon_divider() {
    let node = render(
        "Breadcrumb",
        props! { "sections" => vec!["Home", "Store"], "icon" => "right angle" },
    );

    let divider = node.child_nodes().nth(1).unwrap();
    assert_eq!(divider.element_type, ElementType::tag("i"));
    assert_eq!(divider.class_name(), Some("right angle icon divider"));
    assert_eq!(divider.key.as_deref(), Some("Home-divider"));
}

#[test]
fn test_breadcrumb_text_divider() {
    let node = render(
        "Breadcrumb",
        props! { "sections" => vec!["Home", "Store", "T-Shirt"], "divider" => ">", "size" => "large" },
    );

    assert_eq!(node.class_name(), Some("ui large breadcrumb"));
    assert_eq!(node.text_content(), "Home>Store>T-Shirt");
}

#[test]
fn test_feed_content_shorthand() {
    let node = render(
        "FeedContent",
        props! {
            "date" => "3 days ago",
            "summary" => "You added Elliot",
            "extraText" => "Have you seen what's going on?",
            "extraImages" => vec!["/1.jpg", "/2.jpg"],
            "meta" => "4 Likes",
        },
    );

    assert_eq!(node.class_name(), Some("content"));
    assert_eq!(
        classes(&node),
        vec![
            Some("date"),
            Some("summary"),
            Some("text extra"),
            Some("images extra"),
            Some("meta"),
        ]
    );

    let images = node.child_nodes().nth(3).unwrap();
    let srcs: Vec<_> = images.child_nodes().map(|img| img.props.get_str("src")).collect();
    assert_eq!(srcs, vec![Some("/1.jpg"), Some("/2.jpg")]);
}

#[test]
fn test_loader_and_segment_classes() {
    assert_eq!(render("Loader", props! { "active" => true }).class_name(), Some("ui active loader"));
    assert_eq!(
        render("Loader", props! { "active" => true, "content" => "Loading" }).class_name(),
        Some("ui active text loader")
    );
    assert_eq!(
        render("Segment", props! { "attached" => "top", "textAlign" => "justified" }).class_name(),
        Some("ui top attached justified segment")
    );
}

#[test]
fn test_list_header_class_order() {
    let node = render("ListHeader", props! { "content" => "Fruits", "className" => "big" });
    assert_eq!(node.class_name(), Some("big header"));
    assert_eq!(node.text_content(), "Fruits");
}

#[test]
fn test_dev_mode_reports_mutually_exclusive_props() {
    let sink = CollectingSink::new();
    let engine = stencil_components::engine(EngineOptions::dev())
        .unwrap()
        .with_sink(sink.clone());

    engine
        .instantiate(
            &ComponentId::new("Card"),
            props! { "children" => "Body", "header" => "Title" },
        )
        .unwrap();

    let mut props: Vec<_> = sink.errors().into_iter().map(|e| e.property_name).collect();
    props.sort();
    assert_eq!(props, vec!["children", "header"]);
}
