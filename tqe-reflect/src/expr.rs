//! Expression views needed by the reflection surface.

use tqe_format::records::expr::TupleExpression;
use tqe_format::{ExprIndex, ExprSort, File};

/// A tuple expression's element run in `heap.expr`.
#[derive(Clone, Copy)]
pub struct TupleExpressionView<'a> {
    file: &'a File<'a>,
    record: &'a TupleExpression,
}

impl<'a> TupleExpressionView<'a> {
    pub fn new(file: &'a File<'a>, record: &'a TupleExpression) -> Self {
        Self { file, record }
    }

    /// View the tuple behind `expr`, which must have sort `Tuple`.
    pub fn for_expression(file: &'a File<'a>, expr: ExprIndex) -> Self {
        assert_eq!(
            expr.sort(),
            ExprSort::Tuple,
            "expected a tuple expression",
        );
        Self::new(file, file.tuple_expressions().at(expr))
    }

    pub fn len(&self) -> usize {
        self.record.seq.cardinality.value()
    }

    pub fn is_empty(&self) -> bool {
        self.record.seq.is_empty()
    }

    /// The element expressions, from `heap.expr`.
    pub fn elements(&self) -> &'a [ExprIndex] {
        self.file.tuple_expression_elements(self.record)
    }
}
