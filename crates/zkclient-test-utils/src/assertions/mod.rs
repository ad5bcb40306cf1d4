//! Assertion helpers that report through a [`TestingT`].
//!
//! `equal` and `no_error` cover the deep-equality and no-error checks the
//! workspace's tests need, without pulling in an assertion framework. A failing
//! assertion marks itself as a helper, reports exactly one message and
//! returns; it never panics.
//!
//! Every helper takes an optional message-and-args list, built with
//! [`msg_args!`](crate::msg_args). See [`message`] for how it is rendered.

pub mod message;

use crate::reporter::TestingT;
use serde_json::Value;
use std::fmt::{Debug, Display};

pub use message::msg_and_args_to_string;

/// Builds a message-and-args list from serializable expressions.
///
/// An argument that fails to serialize is replaced by a `%!(BADARG ...)`
/// string rather than panicking.
///
/// ```
/// use zkclient_test_utils::{equal, msg_args, RecordingReporter};
///
/// let mut t = RecordingReporter::new();
/// equal(&mut t, 1, 2, &msg_args!["attempt %d of %d", 1, 3]);
/// assert_eq!(t.messages(), ["not equal: want: 1, got: 2: attempt 1 of 3"]);
/// ```
#[macro_export]
macro_rules! msg_args {
    () => {
        ::std::vec::Vec::<$crate::serde_json::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::assertions::message::to_arg(&$arg)),+]
    };
}

/// Asserts that `want` and `got` are equal.
///
/// Both sides must have the same type; equality is the type's
/// `PartialEq`, so derived impls compare every nested field. Values are
/// rendered with `Debug` in the failure message.
pub fn equal<R, T>(t: &mut R, want: T, got: T, msg_and_args: &[Value])
where
    R: TestingT + ?Sized,
    T: PartialEq + Debug,
{
    if want != got {
        fail(
            t,
            format!("not equal: want: {:?}, got: {:?}", want, got),
            msg_and_args,
        );
    }
}

/// Asserts that `result` is `Ok`.
pub fn no_error<R, T, E>(t: &mut R, result: &Result<T, E>, msg_and_args: &[Value])
where
    R: TestingT + ?Sized,
    E: Display,
{
    if let Err(err) = result {
        fail(t, format!("unexpected error: {}", err), msg_and_args);
    }
}

fn fail<R>(t: &mut R, mut message: String, msg_and_args: &[Value])
where
    R: TestingT + ?Sized,
{
    t.helper();
    let user_message = msg_and_args_to_string(msg_and_args);
    if !user_message.is_empty() {
        message.push_str(": ");
        message.push_str(&user_message);
    }
    t.errorf(&message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::implementations::{Call, RecordingReporter};
    use crate::reporter::TestReporter;
    use std::collections::BTreeMap;

    struct EqualCase {
        name: &'static str,
        give_want: i32,
        give_got: i32,
        give_msg_and_args: Vec<Value>,
        want: Vec<Call>,
    }

    fn errorf(message: &str) -> Call {
        Call::Errorf(message.to_string())
    }

    #[test]
    fn test_equal() {
        let cases = vec![
            EqualCase {
                name: "equal",
                give_want: 1,
                give_got: 1,
                give_msg_and_args: msg_args![],
                want: vec![],
            },
            EqualCase {
                name: "not equal shallow",
                give_want: 1,
                give_got: 2,
                give_msg_and_args: msg_args![],
                want: vec![Call::Helper, errorf("not equal: want: 1, got: 2")],
            },
            EqualCase {
                name: "with message",
                give_want: 1,
                give_got: 2,
                give_msg_and_args: msg_args!["user message"],
                want: vec![Call::Helper, errorf("not equal: want: 1, got: 2: user message")],
            },
            EqualCase {
                name: "with message and args",
                give_want: 1,
                give_got: 2,
                give_msg_and_args: msg_args!["user message: %d %s", 1, "arg2"],
                want: vec![
                    Call::Helper,
                    errorf("not equal: want: 1, got: 2: user message: 1 arg2"),
                ],
            },
            EqualCase {
                name: "only args",
                give_want: 1,
                give_got: 2,
                give_msg_and_args: msg_args![1, "arg2"],
                want: vec![Call::Helper, errorf("not equal: want: 1, got: 2: [1 arg2]")],
            },
        ];

        for case in cases {
            let mut f = RecordingReporter::new();
            equal(&mut f, case.give_want, case.give_got, &case.give_msg_and_args);

            // Self-hosted: the checking reporter is the one under test.
            let mut t = TestReporter::new(case.name);
            equal(&mut t, case.want, f.into_calls(), &[]);
        }
    }

    #[derive(Debug, PartialEq)]
    struct Inner {
        bar: &'static str,
    }

    #[test]
    fn test_equal_deep() {
        let want = BTreeMap::from([("foo", Inner { bar: "baz" })]);
        let got = BTreeMap::from([("foo", Inner { bar: "foobar" })]);

        let mut f = RecordingReporter::new();
        equal(&mut f, &want, &got, &[]);

        let mut t = TestReporter::new("not equal deep");
        equal(
            &mut t,
            vec![
                Call::Helper,
                errorf(r#"not equal: want: {"foo": Inner { bar: "baz" }}, got: {"foo": Inner { bar: "foobar" }}"#),
            ],
            f.into_calls(),
            &[],
        );
    }

    #[test]
    fn test_equal_is_reflexive_for_nested_values() {
        let nested = BTreeMap::from([
            ("numbers", vec![vec![1, 2], vec![3]]),
            ("empty", vec![]),
        ]);

        let mut f = RecordingReporter::new();
        equal(&mut f, &nested, &nested, &[]);
        equal(&mut f, nested.clone(), nested, &[]);
        equal(&mut f, "same", "same", &msg_args!["never rendered %d", 1]);

        assert!(f.calls().is_empty(), "unexpected calls: {:?}", f.calls());
    }

    #[test]
    fn test_unserializable_message_argument_does_not_panic() {
        let keyed_by_tuple = BTreeMap::from([((1, 2), "pair")]);

        let mut f = RecordingReporter::new();
        equal(&mut f, 1, 2, &msg_args!["lookup %v", keyed_by_tuple]);

        let mut t = TestReporter::new("bad arg");
        equal(
            &mut t,
            vec!["not equal: want: 1, got: 2: lookup %!(BADARG key must be a string)"],
            f.messages(),
            &[],
        );
    }

    #[test]
    fn test_oversized_width_in_user_template_does_not_panic() {
        let mut f = RecordingReporter::new();
        equal(&mut f, 1, 2, &msg_args!["%99999999999999999999d", 1]);

        let mut t = TestReporter::new("bad width");
        equal(
            &mut t,
            vec!["not equal: want: 1, got: 2: %!(BADWIDTH)1"],
            f.messages(),
            &[],
        );
    }

    #[test]
    fn test_failures_accumulate_without_halting() {
        let mut f = RecordingReporter::new();
        equal(&mut f, 1, 2, &[]);
        equal(&mut f, 3, 3, &[]);
        equal(&mut f, 4, 5, &msg_args!["second"]);

        let mut t = TestReporter::new("accumulate");
        equal(
            &mut t,
            vec!["not equal: want: 1, got: 2", "not equal: want: 4, got: 5: second"],
            f.messages(),
            &[],
        );
    }

    struct NoErrorCase {
        name: &'static str,
        give_err: Result<(), anyhow::Error>,
        give_msg_and_args: Vec<Value>,
        want: Vec<Call>,
    }

    #[test]
    fn test_no_error() {
        let cases = vec![
            NoErrorCase {
                name: "no error",
                give_err: Ok(()),
                give_msg_and_args: msg_args![],
                want: vec![],
            },
            NoErrorCase {
                name: "with error",
                give_err: Err(anyhow::anyhow!("foo")),
                give_msg_and_args: msg_args![],
                want: vec![Call::Helper, errorf("unexpected error: foo")],
            },
            NoErrorCase {
                name: "with message",
                give_err: Err(anyhow::anyhow!("foo")),
                give_msg_and_args: msg_args!["user message"],
                want: vec![Call::Helper, errorf("unexpected error: foo: user message")],
            },
            NoErrorCase {
                name: "with message and args",
                give_err: Err(anyhow::anyhow!("foo")),
                give_msg_and_args: msg_args!["user message: %d %s", 1, "arg2"],
                want: vec![Call::Helper, errorf("unexpected error: foo: user message: 1 arg2")],
            },
            NoErrorCase {
                name: "only args",
                give_err: Err(anyhow::anyhow!("foo")),
                give_msg_and_args: msg_args![1, "arg2"],
                want: vec![Call::Helper, errorf("unexpected error: foo: [1 arg2]")],
            },
        ];

        for case in cases {
            let mut f = RecordingReporter::new();
            no_error(&mut f, &case.give_err, &case.give_msg_and_args);

            let mut t = TestReporter::new(case.name);
            equal(&mut t, case.want, f.into_calls(), &[]);
        }
    }

    #[test]
    fn test_no_error_uses_display_of_error() {
        let result: Result<u32, std::num::ParseIntError> = "not a number".parse::<u32>();

        let mut f = RecordingReporter::new();
        no_error(&mut f, &result, &[]);

        let mut t = TestReporter::new("display");
        equal(
            &mut t,
            vec!["unexpected error: invalid digit found in string"],
            f.messages(),
            &[],
        );
    }
}
