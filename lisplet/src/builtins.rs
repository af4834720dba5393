use crate::eval::EvalError;
use crate::expr::{Builtin, ExprError, Value};
use crate::prelude::*;

/// The root-scope library. All pure except `print`.
pub fn library() -> Vec<Builtin> {
    vec![
        Builtin {
            name: "first",
            f: first,
        },
        Builtin {
            name: "rest",
            f: rest,
        },
        Builtin {
            name: "print",
            f: print,
        },
    ]
}

pub fn first(args: &[Value]) -> Result<Value, EvalError> {
    let [arg] = args else {
        return Err(EvalError::WrongArgCount {
            required: 1,
            passed: args.len(),
        });
    };
    let list = arg.list_ref_or(ExprError::NotAList)?;
    list.first().cloned().ok_or(EvalError::EmptyList)
}

pub fn rest(args: &[Value]) -> Result<Value, EvalError> {
    let [arg] = args else {
        return Err(EvalError::WrongArgCount {
            required: 1,
            passed: args.len(),
        });
    };
    let list = arg.list_ref_or(ExprError::NotAList)?;
    list.iter()
        .skip(1)
        .cloned()
        .collect::<Vec<_>>()
        .pipe(Value::List)
        .pipe(Ok)
}

/// Side-effecting identity: write the value's display form, hand the
/// value back unchanged.
pub fn print(args: &[Value]) -> Result<Value, EvalError> {
    let [arg] = args else {
        return Err(EvalError::WrongArgCount {
            required: 1,
            passed: args.len(),
        });
    };
    println!("{}", arg);
    Ok(arg.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::Env;
    use crate::eval;
    use crate::expr::list;
    use crate::parser;
    use anyhow::Result;

    fn test_eval_expr(code: &str) -> Result<Value, EvalError> {
        let node = parser::parse_line(code).expect("test code parses");
        eval::eval(&node, &Env::new_global())
    }

    /// macro to setup test boilerplate for builtin applications
    macro_rules! builtin_test {
        ($fn_name:ident, $code:literal, $expected:expr) => {
            #[test]
            fn $fn_name() -> Result<()> {
                assert_eq!(test_eval_expr($code)?, $expected);
                Ok(())
            }
        };
    }

    builtin_test!(first_of_list, "(first (1 2 3))", Value::num(1.)?);

    builtin_test!(
        rest_of_list,
        "(rest (1 2 3))",
        list![Value::num(2.)?, Value::num(3.)?]
    );

    builtin_test!(rest_of_singleton, "(rest (1))", Value::new_list());

    builtin_test!(rest_of_empty, "(rest ())", Value::new_list());

    builtin_test!(print_returns_its_argument, "(print 5)", Value::num(5.)?);

    builtin_test!(
        print_of_list,
        "(print (1 2))",
        list![Value::num(1.)?, Value::num(2.)?]
    );

    #[test]
    fn first_of_empty_list_fails() {
        assert_eq!(
            test_eval_expr("(first ())").unwrap_err(),
            EvalError::EmptyList
        );
    }

    #[test]
    fn first_of_non_list_fails() {
        assert_eq!(
            test_eval_expr("(first 1)").unwrap_err(),
            EvalError::Expr(ExprError::NotAList)
        );
    }

    #[test]
    fn wrong_argument_counts_are_reported() {
        assert_eq!(
            test_eval_expr("(first)").unwrap_err(),
            EvalError::WrongArgCount {
                required: 1,
                passed: 0
            }
        );
        assert_eq!(
            test_eval_expr("(rest (1) (2))").unwrap_err(),
            EvalError::WrongArgCount {
                required: 1,
                passed: 2
            }
        );
    }
}
