//! Template parameter charts.

use tqe_format::records::chart as chart_records;
use tqe_format::records::decl::ParameterDeclaration;
use tqe_format::{ChartIndex, ChartSort, ExprIndex, File};

/// A parameter chart, resolved through the sort tag of its
/// [`ChartIndex`].
#[derive(Clone, Copy)]
pub struct Chart<'a> {
    file: &'a File<'a>,
    index: ChartIndex,
}

impl<'a> Chart<'a> {
    pub fn new(file: &'a File<'a>, index: ChartIndex) -> Self {
        Self { file, index }
    }

    pub fn index(&self) -> ChartIndex {
        self.index
    }

    pub fn is_null(&self) -> bool {
        self.index.is_null()
    }

    pub fn sort(&self) -> ChartSort {
        self.index.sort()
    }

    pub fn as_unilevel(&self) -> Option<UnilevelChart<'a>> {
        (self.sort() == ChartSort::Unilevel).then(|| UnilevelChart {
            file: self.file,
            record: self.file.unilevel_charts().at(self.index),
        })
    }

    pub fn as_multilevel(&self) -> Option<MultilevelChart<'a>> {
        (self.sort() == ChartSort::Multilevel).then(|| MultilevelChart {
            file: self.file,
            record: self.file.multilevel_charts().at(self.index),
        })
    }
}

/// A single-level parameter list.
#[derive(Clone, Copy)]
pub struct UnilevelChart<'a> {
    file: &'a File<'a>,
    record: &'a chart_records::UnilevelChart,
}

impl<'a> UnilevelChart<'a> {
    /// The parameter records, from `decl.parameter`.
    pub fn parameters(&self) -> &'a [ParameterDeclaration] {
        self.file.parameters().slice(self.record.parameters)
    }

    /// The attached constraint, when one exists.
    pub fn requires_clause(&self) -> Option<ExprIndex> {
        let clause = self.record.requires_clause;
        (!clause.is_null()).then_some(clause)
    }
}

/// A multi-level parameter list.
#[derive(Clone, Copy)]
pub struct MultilevelChart<'a> {
    file: &'a File<'a>,
    record: &'a chart_records::MultilevelChart,
}

impl<'a> MultilevelChart<'a> {
    pub fn len(&self) -> usize {
        self.record.levels.cardinality.value()
    }

    pub fn is_empty(&self) -> bool {
        self.record.levels.is_empty()
    }

    /// Iterate the levels, innermost last.
    pub fn levels(&self) -> impl Iterator<Item = UnilevelChart<'a>> + 'a {
        let file = self.file;
        file.unilevel_charts()
            .slice(self.record.levels)
            .iter()
            .map(move |record| UnilevelChart { file, record })
    }
}
