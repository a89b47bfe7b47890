//! End-to-end conversion properties across the whole pipeline.

use std::fmt::Write;

use recase::{
    Case, Converter, to_camel_case, to_dot_case, to_kebab_case, to_pascal_case, to_snake_case,
};

const INPUTS: &[&str] = &[
    "hello world",
    "Hello World",
    "HELLO_WORLD",
    "helloWorld",
    "HelloWorld",
    "hello-world-foo",
    "hello_world-foo bar",
    "123 apple pie",
    "  padded   input  ",
    "don't panic!",
    "",
];

#[test]
fn test_outputs_contain_no_foreign_separators() {
    for input in INPUTS {
        for case in Case::ALL {
            let out = Converter::new(case).convert(input).unwrap();
            for ch in out.chars() {
                assert!(
                    ch.is_alphanumeric() || case.joiner().contains(ch),
                    "{case}: {input:?} produced {out:?} containing {ch:?}"
                );
            }
        }
    }
}

#[test]
fn test_separator_policies_are_idempotent() {
    for input in INPUTS {
        let snake = to_snake_case(input);
        assert_eq!(to_snake_case(&snake), snake, "snake unstable for {input:?}");
        let kebab = to_kebab_case(input);
        assert_eq!(to_kebab_case(&kebab), kebab, "kebab unstable for {input:?}");
        let dot = to_dot_case(input);
        assert_eq!(to_dot_case(&dot), dot, "dot unstable for {input:?}");
    }
}

#[test]
fn test_contiguous_policies_are_stable_under_reapplication() {
    for input in INPUTS {
        let camel = to_camel_case(input);
        assert_eq!(to_camel_case(&camel), camel, "camel unstable for {input:?}");
        let pascal = to_pascal_case(input);
        assert_eq!(to_pascal_case(&pascal), pascal, "pascal unstable for {input:?}");
    }
}

#[test]
fn test_conversion_matrix() {
    let mut table = String::new();
    for input in INPUTS {
        writeln!(
            table,
            "{input:?} => {:?} | {:?} | {:?} | {:?} | {:?}",
            to_camel_case(input),
            to_pascal_case(input),
            to_snake_case(input),
            to_kebab_case(input),
            to_dot_case(input),
        )
        .unwrap();
    }
    insta::assert_snapshot!(table, @r#"
    "hello world" => "helloWorld" | "HelloWorld" | "hello_world" | "hello-world" | "hello.world"
    "Hello World" => "helloWorld" | "HelloWorld" | "hello_world" | "hello-world" | "hello.world"
    "HELLO_WORLD" => "helloWorld" | "HelloWorld" | "hello_world" | "hello-world" | "hello.world"
    "helloWorld" => "helloWorld" | "HelloWorld" | "hello_world" | "hello-world" | "hello.world"
    "HelloWorld" => "helloWorld" | "HelloWorld" | "hello_world" | "hello-world" | "hello.world"
    "hello-world-foo" => "helloWorldFoo" | "HelloWorldFoo" | "hello_world_foo" | "hello-world-foo" | "hello.world.foo"
    "hello_world-foo bar" => "helloWorldFooBar" | "HelloWorldFooBar" | "hello_world_foo_bar" | "hello-world-foo-bar" | "hello.world.foo.bar"
    "123 apple pie" => "123ApplePie" | "123ApplePie" | "123_apple_pie" | "123-apple-pie" | "123.apple.pie"
    "  padded   input  " => "paddedInput" | "PaddedInput" | "padded_input" | "padded-input" | "padded.input"
    "don't panic!" => "dontPanic" | "DontPanic" | "dont_panic" | "dont-panic" | "dont.panic"
    "" => "" | "" | "" | "" | ""
    "#);
}

#[test]
fn test_case_selection_from_config() {
    let case: Case = serde_json::from_str(r#""kebab""#).unwrap();
    assert_eq!(case, Case::Kebab);

    assert_eq!("dot.case".parse::<Case>().unwrap(), Case::Dot);
    assert_eq!(Case::Camel.to_string(), "camel");
}

#[test]
fn test_strict_and_lenient_variants_agree_on_real_input() {
    let lenient = Converter::new(Case::Camel);
    let strict = Converter::new(Case::Camel).strict(true);
    assert_eq!(
        lenient.convert("hello world").unwrap(),
        strict.convert("hello world").unwrap()
    );
}
