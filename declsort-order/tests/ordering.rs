//! End-to-end ordering tests over real source text

use declsort_order::{order_source, Comparator, ComparatorChain, TraitAxis};
use proptest::prelude::*;

fn values(names: &[Option<&str>]) -> Vec<Option<String>> {
    names.iter().map(|v| v.map(|s| s.to_string())).collect()
}

/// kind: [Import, Variable, Function, null], transfer: [IsExported, null]
fn small_chain() -> ComparatorChain {
    ComparatorChain::new(vec![
        Comparator::ranked(
            TraitAxis::Kind,
            &values(&[Some("Import"), Some("Variable"), Some("Function"), None]),
        ),
        Comparator::ranked(TraitAxis::Transfer, &values(&[Some("IsExported"), None])),
    ])
}

/// The full default-shaped chain: every kind, then transfer, then name
fn full_chain() -> ComparatorChain {
    ComparatorChain::new(vec![
        Comparator::ranked(
            TraitAxis::Kind,
            &values(&[
                Some("Header"),
                Some("Import"),
                Some("TypeImport"),
                Some("Enumeration"),
                Some("Type"),
                Some("Interface"),
                Some("Variable"),
                Some("Class"),
                Some("Function"),
                None,
            ]),
        ),
        Comparator::ranked(TraitAxis::Transfer, &values(&[Some("IsExported"), None])),
        Comparator::name().ignore_if_single_line(true),
    ])
}

#[test]
fn banner_import_variable_function_scenario() {
    let source = "\
// Module banner

import \"mod\";
export function main() {}
const option = \"x\";
";
    let expected = "\
// Module banner

import \"mod\";

const option = \"x\";

export function main() {}
";
    assert_eq!(order_source(source, &small_chain()), expected);
}

#[test]
fn already_ordered_input_is_unchanged() {
    let source = "\
import \"mod\";

const option = \"x\";

export function main() {}
";
    assert_eq!(order_source(source, &small_chain()), source);
}

#[test]
fn stability_preserves_source_order_for_policy_equal_declarations() {
    let source = "const zeta = 1;\nconst alpha = 2;\n";
    // no name comparator: the two variables are policy-equal
    assert_eq!(order_source(source, &small_chain()), source);
}

#[test]
fn unknown_statements_sort_to_the_wildcard_position() {
    let source = "doWork();\nimport \"mod\";\n";
    let out = order_source(source, &small_chain());
    assert_eq!(out, "import \"mod\";\n\ndoWork();\n");
}

#[test]
fn full_file_snapshot() {
    let source = r#"// Widget module
// (banner)

import { render } from "./render";
import type { Config } from "./config";
export const VERSION = "1.0";
const cache = new Map();

export function draw(target: string): void {
    render(target);
}

export class Widget {
    config: Config;
}

type Target = string;
enum Mode { Fast, Slow }
"#;
    let out = order_source(source, &full_chain());
    insta::assert_snapshot!(out, @r###"
    // Widget module
    // (banner)

    import { render } from "./render";

    import type { Config } from "./config";

    enum Mode { Fast, Slow }

    type Target = string;

    export const VERSION = "1.0";

    const cache = new Map();

    export class Widget {
        config: Config;
    }

    export function draw(target: string): void {
        render(target);
    }
    "###);
}

fn declaration_strategy() -> impl Strategy<Value = String> {
    let name = "[a-z]{3,8}";
    prop_oneof![
        name.prop_map(|n| format!("const {} = 1;", n)),
        name.prop_map(|n| format!("export const {} = 2;", n)),
        name.prop_map(|n| format!("function {}() {{}}", n)),
        name.prop_map(|n| format!("export function {}() {{}}", n)),
        name.prop_map(|n| format!("import \"{}\";", n)),
        name.prop_map(|n| format!("type {} = number;", n)),
    ]
}

proptest! {
    /// Ordering its own output changes nothing
    #[test]
    fn ordering_is_idempotent(decls in prop::collection::vec(declaration_strategy(), 0..12)) {
        let chain = full_chain();
        let source = decls.join("\n");
        let once = order_source(&source, &chain);
        let twice = order_source(&once, &chain);
        prop_assert_eq!(once, twice);
    }

    /// Every input line survives the rewrite
    #[test]
    fn ordering_preserves_declarations(decls in prop::collection::vec(declaration_strategy(), 1..10)) {
        let chain = full_chain();
        let source = decls.join("\n");
        let out = order_source(&source, &chain);
        for decl in &decls {
            prop_assert!(out.contains(decl.as_str()), "{} missing from {}", decl, out);
        }
    }
}
