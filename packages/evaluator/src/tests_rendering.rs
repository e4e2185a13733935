/// Rendering tests: control flow, iteration, scope binding and modifiers
use crate::*;
use serde_json::json;
use stackblocks_model::*;

#[cfg(test)]
mod rendering_tests {
    use super::*;

    fn text(id: &str, value: &str) -> Node {
        Node::view(
            id,
            View::Text(TextArgs {
                value: value.to_string(),
            }),
        )
    }

    fn vstack(id: &str, content: Vec<Node>) -> Node {
        Node::view(
            id,
            View::VStack(StackArgs {
                spacing: None,
                content,
            }),
        )
    }

    fn if_block(id: &str, condition: &str, content: Vec<Node>) -> Node {
        Node::control(
            id,
            Control::If(IfArgs {
                condition: condition.to_string(),
                content,
            }),
        )
    }

    fn for_each(id: &str, data: &str, key: &str, item: Option<&str>, content: Vec<Node>) -> Node {
        Node::view(
            id,
            View::ForEach(ForEachArgs {
                data: data.to_string(),
                id: key.to_string(),
                item: item.map(str::to_string),
                content,
            }),
        )
    }

    fn font(id: &str, font: FontStyle) -> Node {
        Node::modifier(id, Modifier::Font(FontArgs { font }))
    }

    fn state(scope: serde_json::Value, tree: Vec<Node>) -> EditorState {
        EditorState::new(Value::from(scope), tree)
    }

    #[test]
    fn test_for_each_dedups_by_id_first_wins() {
        let preview = Evaluator::new().render_tree(&state(
            json!({ "items": [
                { "id": 1, "name": "first" },
                { "id": 1, "name": "second" },
                { "id": 2, "name": "third" }
            ] }),
            vec![for_each("list", "items", "id", None, vec![text("t", "$0.name")])],
        ));

        assert_eq!(preview.texts(), vec!["first", "third"]);
        assert!(preview.diagnostics.is_empty());
    }

    #[test]
    fn test_for_each_single_iteration_for_duplicate_ids() {
        let preview = Evaluator::new().render_tree(&state(
            json!({ "items": [{ "id": 1, "v": "a" }, { "id": 1, "v": "b" }] }),
            vec![for_each("list", "items", "id", None, vec![text("t", "$0.v")])],
        ));

        assert_eq!(preview.texts().len(), 1);
    }

    #[test]
    fn test_if_renders_content_when_scope_flag_true() {
        let tree = vec![if_block("cond", "$0.completed", vec![text("done", "\"Done\"")])];

        let shown = Evaluator::new().render_tree(&state(json!({ "$0": { "completed": true } }), tree.clone()));
        assert_eq!(shown.texts(), vec!["Done"]);

        let hidden = Evaluator::new().render_tree(&state(json!({ "$0": { "completed": false } }), tree.clone()));
        assert!(hidden.nodes.is_empty());
        assert!(hidden.diagnostics.is_empty());

        let unresolved = Evaluator::new().render_tree(&state(json!({}), tree));
        assert!(unresolved.nodes.is_empty());
        assert_eq!(
            unresolved.diagnostics,
            vec![EvalError::UnresolvedCondition {
                node_id: "cond".to_string(),
                condition: "$0.completed".to_string(),
            }]
        );
    }

    #[test]
    fn test_if_inside_for_each_sees_item_binding() {
        let preview = Evaluator::new().render_tree(&state(
            json!({ "todos": [
                { "id": "a", "title": "Wash", "completed": true },
                { "id": "b", "title": "Cook", "completed": false }
            ] }),
            vec![for_each(
                "list",
                "todos",
                "id",
                None,
                vec![if_block("cond", "$0.completed", vec![text("t", "$0.title")])],
            )],
        ));

        assert_eq!(preview.texts(), vec!["Wash"]);
    }

    #[test]
    fn test_for_each_non_array_renders_nothing() {
        let mut evaluator = Evaluator::new();
        let preview = evaluator.render_tree(&state(
            json!({ "items": { "id": 1 } }),
            vec![
                for_each("list", "items", "id", None, vec![text("t", "$0.name")]),
                text("after", "\"still here\""),
            ],
        ));

        assert_eq!(preview.texts(), vec!["still here"]);
        assert_eq!(preview.diagnostics.len(), 1);
        assert_eq!(preview.diagnostics[0].node_id(), "list");
    }

    #[test]
    fn test_for_each_with_element_missing_key_renders_nothing() {
        let preview = Evaluator::new().render_tree(&state(
            json!({ "items": [{ "id": 1, "name": "a" }, { "name": "b" }] }),
            vec![
                for_each("list", "items", "id", None, vec![text("t", "$0.name")]),
                text("after", "\"still here\""),
            ],
        ));

        assert_eq!(preview.texts(), vec!["still here"]);
        assert_eq!(
            preview.diagnostics,
            vec![EvalError::MissingIdKey {
                node_id: "list".to_string(),
                key: "id".to_string(),
                index: 1,
            }]
        );
    }

    #[test]
    fn test_negated_condition_is_unresolved() {
        let preview = Evaluator::new().render_tree(&state(
            json!({ "flag": true }),
            vec![if_block("cond", "!flag", vec![text("t", "\"shown\"")])],
        ));

        assert!(preview.nodes.is_empty());
        assert_eq!(
            preview.diagnostics,
            vec![EvalError::UnresolvedCondition {
                node_id: "cond".to_string(),
                condition: "!flag".to_string(),
            }]
        );
    }

    #[test]
    fn test_for_each_self_id_over_strings() {
        let preview = Evaluator::new().render_tree(&state(
            json!({ "tags": ["red", "blue", "red"] }),
            vec![for_each("list", "tags", "\\.self", Some("tag"), vec![text("t", "tag")])],
        ));

        assert_eq!(preview.texts(), vec!["red", "blue"]);
    }

    #[test]
    fn test_for_each_extends_parent_scope() {
        let preview = Evaluator::new().render_tree(&state(
            json!({ "title": "Shop", "items": [{ "id": 1, "name": "Milk" }] }),
            vec![for_each(
                "list",
                "items",
                "id",
                Some("item"),
                vec![text("a", "item.name"), text("b", "title")],
            )],
        ));

        assert_eq!(preview.texts(), vec!["Milk", "Shop"]);
    }

    #[test]
    fn test_nested_for_each_bindings_are_independent() {
        let preview = Evaluator::new().render_tree(&state(
            json!({ "groups": [
                { "id": "g1", "name": "Fruit", "items": [{ "id": 1, "name": "Apple" }] },
                { "id": "g2", "name": "Veg", "items": [{ "id": 1, "name": "Leek" }, { "id": 2, "name": "Kale" }] }
            ] }),
            vec![for_each(
                "groups",
                "groups",
                "id",
                Some("group"),
                vec![
                    text("header", "group.name"),
                    for_each("items", "group.items", "id", Some("item"), vec![text("row", "item.name")]),
                ],
            )],
        ));

        assert_eq!(preview.texts(), vec!["Fruit", "Apple", "Veg", "Leek", "Kale"]);
    }

    #[test]
    fn test_configured_default_binding() {
        let mut evaluator = Evaluator::with_options(EvaluatorOptions {
            default_binding: "it".to_string(),
        });
        let preview = evaluator.render_tree(&state(
            json!({ "items": [{ "id": 1, "name": "x" }] }),
            vec![for_each("list", "items", "id", None, vec![text("t", "it.name")])],
        ));

        assert_eq!(preview.texts(), vec!["x"]);
        assert_eq!(evaluator.options().default_binding, "it");
    }

    #[test]
    fn test_stack_preserves_order_and_scope() {
        let data = Value::from(json!({ "greeting": "Hi" }));
        let node = vstack(
            "root",
            vec![
                text("a", "greeting"),
                Node::view("gap", View::Spacer(SpacerArgs::default())),
                text("b", "\"there\""),
            ],
        );

        let rendered = render(&node, &Scope::new(&data)).unwrap();
        let RenderNode::Stack { axis, children, .. } = &rendered else {
            panic!("Expected stack");
        };
        assert_eq!(*axis, Axis::Vertical);
        assert_eq!(children.len(), 3);
        assert_eq!(rendered.texts(), vec!["Hi", "there"]);
    }

    #[test]
    fn test_last_modifier_is_closest_to_host() {
        let data = Value::object();
        let node = text("t", "\"Hello\"")
            .with_modifier(font("outer", FontStyle::Title))
            .with_modifier(font("inner", FontStyle::Caption));

        let rendered = render(&node, &Scope::new(&data)).unwrap();
        assert_eq!(
            rendered,
            RenderNode::Text {
                content: "Hello".to_string(),
                style: Style {
                    font: Some(FontStyle::Caption),
                    foreground_color: None,
                },
            }
        );
    }

    #[test]
    fn test_wrapping_modifiers_nest_in_reverse() {
        let data = Value::object();
        let node = text("t", "\"Hello\"")
            .with_modifier(Node::modifier(
                "frame",
                Modifier::Frame(FrameArgs {
                    width: Some(100.0),
                    height: None,
                }),
            ))
            .with_modifier(Node::modifier(
                "pad",
                Modifier::Padding(PaddingArgs { amount: Some(4.0) }),
            ));

        let rendered = render(&node, &Scope::new(&data)).unwrap();
        let RenderNode::Frame { content, width, .. } = &rendered else {
            panic!("Expected frame outermost, got {:?}", rendered);
        };
        assert_eq!(*width, Some(100.0));
        assert!(matches!(content.as_ref(), RenderNode::Padding { amount: Some(a), .. } if *a == 4.0));
    }

    #[test]
    fn test_background_layer_uses_host_scope() {
        let preview = Evaluator::new().render_tree(&state(
            json!({ "items": [{ "id": 1, "name": "Milk", "tint": "Fresh" }] }),
            vec![for_each(
                "list",
                "items",
                "id",
                None,
                vec![text("t", "$0.name").with_modifier(Node::modifier(
                    "bg",
                    Modifier::Background(BackgroundArgs {
                        content: vec![text("label", "$0.tint")],
                    }),
                ))],
            )],
        ));

        let RenderNode::Group { children } = &preview.nodes[0] else {
            panic!("Expected group");
        };
        let RenderNode::Background { content, layer } = &children[0] else {
            panic!("Expected background");
        };
        assert_eq!(content.texts(), vec!["Milk"]);
        assert_eq!(layer[0].texts(), vec!["Fresh"]);
    }

    #[test]
    fn test_foreground_color_after_background_styles_host_only() {
        let data = Value::object();
        let node = text("t", "\"Hi\"")
            .with_modifier(Node::modifier(
                "color",
                Modifier::ForegroundColor(ForegroundColorArgs {
                    color: NamedColor::Red,
                }),
            ))
            .with_modifier(Node::modifier(
                "bg",
                Modifier::Background(BackgroundArgs {
                    content: vec![text("layer", "\"under\"")],
                }),
            ));

        let rendered = render(&node, &Scope::new(&data)).unwrap();
        let RenderNode::Background { content, layer } = &rendered else {
            panic!("Expected background");
        };
        assert!(matches!(
            content.as_ref(),
            RenderNode::Text { style, .. } if style.foreground_color == Some(NamedColor::Red)
        ));
        assert!(matches!(
            &layer[0],
            RenderNode::Text { style, .. } if style.foreground_color.is_none()
        ));
    }

    #[test]
    fn test_templates() {
        let inner = vec![text("t", "\"Hello\"")];
        let preview = Evaluator::new().render_tree(&state(
            json!({}),
            vec![
                Node::template("preview", Template::Content(TemplateArgs { content: inner.clone() })),
                Node::template("source", Template::Code(TemplateArgs { content: inner })),
            ],
        ));

        assert_eq!(preview.nodes[0].texts(), vec!["Hello"]);
        assert_eq!(
            preview.nodes[1],
            RenderNode::Code {
                source: "Text(\"Hello\")\n".to_string(),
            }
        );
    }

    #[test]
    fn test_diagnostics_reset_between_renders() {
        let mut evaluator = Evaluator::new();
        let broken = state(json!({}), vec![if_block("cond", "nope", vec![])]);

        assert_eq!(evaluator.render_tree(&broken).diagnostics.len(), 1);
        assert_eq!(evaluator.render_tree(&broken).diagnostics.len(), 1);
        assert!(evaluator.diagnostics().is_empty());
    }

    #[test]
    fn test_render_is_deterministic() {
        let snapshot = state(
            json!({ "items": [{ "id": 1, "name": "a" }, { "id": 2, "name": "b" }] }),
            vec![vstack(
                "root",
                vec![for_each("list", "items", "id", None, vec![text("t", "$0.name")])],
            )],
        );

        let first = Evaluator::new().render_tree(&snapshot);
        let second = Evaluator::new().render_tree(&snapshot);
        assert_eq!(first, second);
    }
}
