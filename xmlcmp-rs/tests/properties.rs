#![allow(clippy::unwrap_used)]

use std::collections::BTreeMap;

use proptest::{collection::btree_map, collection::vec, option, prelude::*};

use xmlcmp::{
    parse, print_to_string, Declaration, Element, ElementBuilder, Fragment, LoosePath, Options,
};

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,5}"
}

fn attributes_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    btree_map(name_strategy(), "[a-zA-Z0-9 &<>]{0,6}", 0..4)
}

fn with_attributes(name: String, attributes: BTreeMap<String, String>) -> ElementBuilder {
    attributes
        .into_iter()
        .fold(ElementBuilder::new(name), |builder, (k, v)| builder.attribute(k, v))
}

// Text only appears in childless elements, so two text runs are never
// adjacent and printing then parsing gives back the same tree.
fn element_strategy() -> impl Strategy<Value = Element> {
    let leaf = (
        name_strategy(),
        attributes_strategy(),
        option::of("[a-zA-Z0-9]{1,8}"),
    )
        .prop_map(|(name, attributes, text)| {
            let builder = with_attributes(name, attributes);
            let builder = match text {
                Some(text) => builder.text(text),
                None => builder,
            };
            builder.build().unwrap()
        });

    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            name_strategy(),
            attributes_strategy(),
            vec(inner, 1..4),
            option::of("[a-z ]{0,8}"),
        )
            .prop_map(|(name, attributes, children, comment)| {
                let builder = children
                    .into_iter()
                    .fold(with_attributes(name, attributes), ElementBuilder::child);
                let builder = match comment {
                    Some(comment) => builder.comment(comment),
                    None => builder,
                };
                builder.build().unwrap()
            })
    })
}

fn fragment_strategy() -> impl Strategy<Value = Fragment> {
    element_strategy().prop_map(|root| Fragment::new(Declaration::empty(), root))
}

fn options_strategy() -> impl Strategy<Value = Options> {
    any::<u8>().prop_map(Options::from_bits_truncate)
}

proptest! {
    #[test]
    fn test_diff_is_reflexive(fragment in fragment_strategy(), options in options_strategy()) {
        let diffs = fragment.diff(&fragment.clone(), options);
        prop_assert!(diffs.is_empty(), "{}", diffs);
    }

    #[test]
    fn test_print_parse_roundtrip(fragment in fragment_strategy()) {
        let printed = print_to_string(&fragment).unwrap();
        let reparsed = parse(&printed).unwrap();
        prop_assert_eq!(&reparsed, &fragment);
        prop_assert!(reparsed.diff(&fragment, Options::NONE).is_empty());
    }

    #[test]
    fn test_reordered_children_equal_when_order_ignored(
        name in name_strategy(),
        children in vec(element_strategy(), 2..6)
    ) {
        let forward = children
            .iter()
            .cloned()
            .fold(ElementBuilder::new(name.clone()), ElementBuilder::child)
            .build()
            .unwrap();
        let backward = children
            .into_iter()
            .rev()
            .fold(ElementBuilder::new(name), ElementBuilder::child)
            .build()
            .unwrap();
        let forward = Fragment::new(Declaration::empty(), forward);
        let backward = Fragment::new(Declaration::empty(), backward);

        let diffs = backward.diff(&forward, Options::IGNORE_ELEMENTS_ORDER);
        prop_assert!(diffs.is_empty());
        prop_assert!(backward.diff(&forward, Options::DEFAULT).is_empty());
    }

    #[test]
    fn test_loose_path_roundtrip(
        elements in vec(name_strategy(), 1..5),
        attribute in option::of(name_strategy())
    ) {
        let mut path = LoosePath::root();
        for element in &elements {
            path = path.element(element.as_str()).unwrap();
        }
        if let Some(attribute) = &attribute {
            path = path.attribute(attribute.as_str()).unwrap();
        }

        let text = path.to_string();
        prop_assert!(text.starts_with('/'));
        prop_assert_eq!(text.parse::<LoosePath>().unwrap(), path);
    }

    #[test]
    fn test_options_display_parses_back(options in options_strategy()) {
        prop_assert_eq!(options.to_string().parse::<Options>().unwrap(), options);
    }

    #[test]
    fn test_count_at_root_is_one(fragment in fragment_strategy()) {
        let path = LoosePath::root().element(fragment.root().name()).unwrap();
        prop_assert_eq!(fragment.count_at(&path, None, Options::NONE), 1);
    }
}
