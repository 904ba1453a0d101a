use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Bindings, EvalResult, EvaluationContext},
            utils::check_finite,
        },
        value::core::Value,
    },
};

impl EvaluationContext {
    /// Evaluates a `sum[...]` aggregate.
    ///
    /// The lists referenced by `body` drive the aggregate: each must have the
    /// same length `K`, and term `i` evaluates `body` with every driving list
    /// bound to its `i`-th element. The terms are added element-wise:
    ///
    /// ```text
    ///     sum[body] = Σ_{i=0}^{K-1} body(i)
    /// ```
    ///
    /// With `K = 0` the aggregate is zero at every sample. Every symbol of the
    /// body is resolved before any term is evaluated, so an unbound name fails
    /// even when there are no terms.
    ///
    /// # Parameters
    /// - `body`: The aggregate body.
    /// - `node`: The `sum[...]` node, named in errors.
    /// - `bindings`: Bindings already in effect. Aggregates do not nest, so
    ///   this is `None` for trees produced by the parser.
    ///
    /// # Returns
    /// The accumulated value; a scalar if `body` never depends on the
    /// independent variable.
    ///
    /// # Example
    /// ```
    /// use formula_dispersion::{EvaluationContext, parse_formula};
    ///
    /// let ctx = EvaluationContext::from_slice("x", &[1.0, 2.0]).with_list("a", vec![1.0, 2.0, 3.0]);
    ///
    /// let expr = parse_formula("sum[a]").unwrap();
    /// assert_eq!(ctx.evaluate(&expr).unwrap().to_vec(), vec![6.0, 6.0]);
    ///
    /// let expr = parse_formula("sum[a * x]").unwrap();
    /// assert_eq!(ctx.evaluate(&expr).unwrap().to_vec(), vec![6.0, 12.0]);
    /// ```
    pub(crate) fn eval_sum(&self,
                           body: &Expr,
                           node: &Expr,
                           bindings: Option<&Bindings>)
                           -> EvalResult<Value> {
        self.check_body_symbols(body, bindings)?;
        let driving = self.driving_lists(body, node)?;
        let term_count = driving.first().map_or(0, |(_, values)| values.len());

        let mut total = Value::Scalar(0.0);
        for i in 0..term_count {
            let mut term_bindings = bindings.cloned().unwrap_or_default();
            for (name, values) in &driving {
                term_bindings.insert((*name).to_owned(), values[i]);
            }

            let term = self.eval(body, Some(&term_bindings))?;
            total = Self::map_array_binary(&total, &term, &|acc, t, sample| {
                        check_finite(acc + t, sample, node)
                    })?;
        }

        log::trace!("evaluated {node} over {term_count} terms");
        Ok(total)
    }

    /// Checks that every symbol of an aggregate body names the independent
    /// variable, a binding already in effect, a constant or a list.
    ///
    /// # Errors
    /// `UnknownSymbol` for the first symbol bound nowhere.
    fn check_body_symbols(&self, body: &Expr, bindings: Option<&Bindings>) -> EvalResult<()> {
        let unbound = |name: &str| {
            name != self.independent_name()
            && !bindings.is_some_and(|b| b.contains_key(name))
            && self.constant(name).is_none()
            && self.list(name).is_none()
        };

        match body.find_variable(&unbound) {
            Some(Expr::Variable { name, position }) => {
                Err(RuntimeError::UnknownSymbol { name:     name.clone(),
                                                  position: *position, })
            },
            _ => Ok(()),
        }
    }

    /// Finds the lists that drive an aggregate body, in order of first
    /// appearance.
    ///
    /// A name equal to the independent variable never drives an aggregate,
    /// even if a list of the same name exists.
    ///
    /// # Errors
    /// - `EmptyAggregate` if the body references no list.
    /// - `ListLengthMismatch` if two driving lists differ in length.
    fn driving_lists<'e>(&self, body: &'e Expr, node: &Expr) -> EvalResult<Vec<(&'e str, &[f64])>> {
        let driving = body.symbols()
                          .into_iter()
                          .filter(|name| *name != self.independent_name())
                          .filter_map(|name| self.list(name).map(|values| (name, values)))
                          .collect::<Vec<_>>();

        let Some((first, first_values)) = driving.first() else {
            return Err(RuntimeError::EmptyAggregate { expr:     node.to_string(),
                                                      position: node.position(), });
        };

        if let Some((other, other_values)) =
            driving.iter().find(|(_, values)| values.len() != first_values.len())
        {
            return Err(RuntimeError::ListLengthMismatch { first:     (*first).to_owned(),
                                                          first_len: first_values.len(),
                                                          other:     (*other).to_owned(),
                                                          other_len: other_values.len(),
                                                          position:  node.position(), });
        }

        Ok(driving)
    }
}
