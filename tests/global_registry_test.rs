/// Tests for the process-wide augmenter namespace.
///
/// The namespace is shared by every test in this binary, so each test
/// registers under names nobody else uses.

#[cfg(test)]
mod tests {
    use augment::prelude::*;
    use serde_json::{json, Value};

    fn with_flag(flag: &'static str) -> Augmenter<Value, Value> {
        augmenter_fn(move |inner: Component<Value, Value>, _props: &Props| {
            component_fn(move |mut input: Value| {
                input[flag] = json!(true);
                inner(input)
            })
        })
    }

    fn with_config() -> Augmenter<Value, Value> {
        augmenter_fn(|inner: Component<Value, Value>, props: &Props| {
            let config = props.to_value();
            component_fn(move |mut input: Value| {
                input["config"] = config.clone();
                inner(input)
            })
        })
    }

    #[test]
    fn test_register_and_apply_by_name() {
        augment::register(
            [
                ("globalMounted", with_flag("mounted")),
                ("globalConfig", with_config()),
            ]
            .into_iter()
            .collect::<Dynamic<_, _>>(),
        )
        .unwrap();

        let render = component_fn(|input: Value| input);
        let wrapped = augment::component(
            render,
            &["globalMounted".into(), "globalConfig".into()],
            &Props::new().with("props", "test"),
        )
        .unwrap();

        let rendered = wrapped(json!({}));
        assert_eq!(rendered["mounted"], json!(true));
        assert_eq!(rendered["config"], json!({ "props": "test" }));
    }

    #[test]
    fn test_list_exposes_registered_names() {
        augment::register([("globalListed", with_flag("listed"))].into_iter().collect::<Dynamic<_, _>>())
            .unwrap();

        assert!(augment::list().unwrap().contains_key("globalListed"));
        assert!(augment::global().registry().contains("globalListed").unwrap());
    }

    #[test]
    fn test_register_rejects_non_object() {
        let err = augment::register(json!("useMounted")).unwrap_err();
        assert_eq!(
            err,
            AugmentError::Type {
                invoked: Kind::String,
                expected: Kind::Object,
            }
        );
    }

    #[test]
    fn test_wrapper_decorates_later() {
        let decorate = augment::wrapper(vec!["globalDecorated".into()], Props::new());
        augment::register([("globalDecorated", with_flag("navigate"))].into_iter().collect::<Dynamic<_, _>>())
            .unwrap();

        let wrapped = decorate.apply(component_fn(|input: Value| input)).unwrap();
        assert_eq!(wrapped(json!({}))["navigate"], json!(true));
    }
}
