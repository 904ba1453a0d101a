use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Bindings, EvalResult, EvaluationContext},
            function::builtin,
            utils::check_finite,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// Built-ins are applied to one sample at a time.
type BuiltinFn = fn(f64) -> f64;

/// Type alias for the domain predicate of a builtin.
///
/// Returns `false` for arguments where the builtin has no real value.
type DomainFn = fn(f64) -> bool;

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - the number of arguments,
/// - a function pointer implementing the builtin,
/// - a domain predicate.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr,
                domain: $domain:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:   &'static str,
            arity:  usize,
            func:   BuiltinFn,
            domain: DomainFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func, domain: $domain },
            )*
        ];
    };
}

builtin_functions! {
    "sin"       => { arity: 1, func: f64::sin,            domain: builtin::everywhere },
    "cos"       => { arity: 1, func: f64::cos,            domain: builtin::everywhere },
    "tan"       => { arity: 1, func: f64::tan,            domain: builtin::everywhere },
    "exp"       => { arity: 1, func: f64::exp,            domain: builtin::everywhere },
    "sqrt"      => { arity: 1, func: f64::sqrt,           domain: builtin::non_negative },
    "ln"        => { arity: 1, func: f64::ln,             domain: builtin::positive },
    "log"       => { arity: 1, func: f64::log10,          domain: builtin::positive },
    "heaviside" => { arity: 1, func: builtin::heaviside,  domain: builtin::everywhere },
    "dawsn"     => { arity: 1, func: builtin::dawson,     domain: builtin::everywhere },
}

fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Returns the number of arguments of a builtin, or `None` if `name` is not
/// a builtin.
///
/// # Example
/// ```
/// use formula_dispersion::interpreter::evaluator::function::core::builtin_arity;
///
/// assert_eq!(builtin_arity("sqrt"), Some(1));
/// assert_eq!(builtin_arity("gamma"), None);
/// ```
#[must_use]
pub fn builtin_arity(name: &str) -> Option<usize> {
    lookup(name).map(|b| b.arity)
}

impl EvaluationContext {
    /// Evaluates a builtin function call.
    ///
    /// The argument is evaluated first, then the builtin is applied sample by
    /// sample. An argument outside the builtin's domain, or a non-finite
    /// result, stops evaluation at the first failing sample.
    ///
    /// The parser only produces calls to known builtins with the right
    /// number of arguments; the checks here cover trees built by hand.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `node`: The call node, named in errors.
    /// - `bindings`: Element bindings when inside a `sum[...]` term.
    ///
    /// # Errors
    /// - `UnknownFunction` if `name` is not a builtin.
    /// - `ArgumentCountMismatch` on wrong arity.
    /// - `InvalidArgument` for an out-of-domain argument.
    /// - `NonFinite` if the result overflows.
    pub(crate) fn eval_function_call(&self,
                                     name: &str,
                                     arguments: &[Expr],
                                     node: &Expr,
                                     bindings: Option<&Bindings>)
                                     -> EvalResult<Value> {
        let builtin = lookup(name).ok_or_else(|| RuntimeError::UnknownFunction { name:     name.to_owned(),
                                                                                 position: node.position(), })?;

        let [argument] = arguments else {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.to_owned(),
                                                             expected: builtin.arity,
                                                             found:    arguments.len(),
                                                             position: node.position(), });
        };

        let value = self.eval(argument, bindings)?;
        value.try_map(|x, sample| {
                 if !(builtin.domain)(x) {
                     return Err(RuntimeError::InvalidArgument { function: name.to_owned(),
                                                                value: x,
                                                                expr: node.to_string(),
                                                                sample,
                                                                position: node.position() });
                 }
                 check_finite((builtin.func)(x), sample, node)
             })
    }
}
