use crate::trace::Sink;
use std::fmt::Display;

/// Returns the sum of `values`, emitting a trace record listing the inputs before computing and
/// one stating the result afterwards. An empty slice sums to 0. Addition wraps on i64 overflow -
/// there's no bounds checking.
pub(crate) fn sum_with_trace(values: &[i64], sink: &dyn Sink) -> i64 {
    sink.record(&format!("Calculating the sum of {}", Tuple(values)));
    let res = values.iter().fold(0i64, |acc, v| acc.wrapping_add(*v));
    sink.record(&format!("Result is {res}"));
    res
}

/// Renders a sequence as a parenthesized tuple. A single element gets a trailing comma so that
/// `(5,)` can't be mistaken for a bare scalar. Both the trace records and the tests that check
/// their text go through this, so the rendering only needs to be consistent, not canonical.
pub(crate) struct Tuple<'a>(pub(crate) &'a [i64]);

impl<'a> Display for Tuple<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
