//! Parsing of edge-list records into a [`LabelledGraph`].

use std::io::BufRead;

use arbor_core::{GraphBuilder, LabelledGraph};
use tracing::{Span, debug, field, instrument};

use crate::errors::EdgeListError;

const COMMENT_PREFIX: char = '#';

/// Parsing options for [`EdgeListProvider`].
///
/// # Examples
/// ```
/// use arbor_providers_edgelist::EdgeListOptions;
///
/// assert_eq!(EdgeListOptions::default().delimiter(), ',');
/// assert_eq!(EdgeListOptions::default().with_delimiter('\t').delimiter(), '\t');
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EdgeListOptions {
    delimiter: char,
}

impl Default for EdgeListOptions {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl EdgeListOptions {
    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Returns the field delimiter.
    #[must_use]
    #[rustfmt::skip]
    pub fn delimiter(&self) -> char { self.delimiter }
}

/// A named graph loaded from an edge list.
#[derive(Clone, Debug)]
pub struct EdgeListProvider {
    name: String,
    graph: LabelledGraph,
}

impl EdgeListProvider {
    /// Parses comma-separated records from `reader`.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] when reading fails or a record is malformed.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use arbor_providers_edgelist::EdgeListProvider;
    ///
    /// let input = "A,B,1,C,3\nB,C,2\n";
    /// let provider = EdgeListProvider::try_from_reader("demo", Cursor::new(input))?;
    /// assert_eq!(provider.name(), "demo");
    /// assert_eq!(provider.graph().graph().vertex_count(), 3);
    /// assert_eq!(provider.graph().graph().edges().len(), 3);
    /// # Ok::<(), arbor_providers_edgelist::EdgeListError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, EdgeListError> {
        Self::try_from_reader_with_options(name, reader, EdgeListOptions::default())
    }

    /// Parses records from `reader` using `options`.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] when reading fails or a record is malformed.
    #[instrument(
        name = "edgelist.load",
        err,
        skip_all,
        fields(name = field::Empty, delimiter = ?options.delimiter()),
    )]
    pub fn try_from_reader_with_options<R: BufRead>(
        name: impl Into<String>,
        reader: R,
        options: EdgeListOptions,
    ) -> Result<Self, EdgeListError> {
        let name = name.into();
        Span::current().record("name", field::display(&name));

        let mut builder = GraphBuilder::new();
        let mut records = 0_usize;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if parse_record(&mut builder, index + 1, &line, options.delimiter)? {
                records += 1;
            }
        }

        let graph = builder.build();
        debug!(
            records,
            vertices = graph.graph().vertex_count(),
            edges = graph.graph().edges().len(),
            "edge list loaded"
        );
        Ok(Self { name, graph })
    }

    /// Returns the name given at load time.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    /// Returns the loaded graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &LabelledGraph { &self.graph }

    /// Consumes the provider, returning the loaded graph.
    #[must_use]
    pub fn into_graph(self) -> LabelledGraph {
        self.graph
    }
}

/// Adds one record to `builder`. Returns `false` for skipped lines.
fn parse_record(
    builder: &mut GraphBuilder,
    line_number: usize,
    line: &str,
    delimiter: char,
) -> Result<bool, EdgeListError> {
    let content = line.trim();
    if content.is_empty() || content.starts_with(COMMENT_PREFIX) {
        return Ok(false);
    }

    // Split the raw line: a whitespace delimiter may open it with an empty
    // source field. Fields are trimmed individually.

    let mut fields: Vec<&str> = line.split(delimiter).map(str::trim).collect();
    // A trailing delimiter leaves empty final fields; they carry no data.
    while fields.len() > 1 && fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    let (source, pairs) = fields
        .split_first()
        .ok_or(EdgeListError::EmptyLabel { line: line_number })?;
    let source = require_label(source, line_number)?;
    builder.add_vertex(source);

    for pair in pairs.chunks(2) {
        let target = require_label(pair[0], line_number)?;
        let raw_weight = pair.get(1).ok_or_else(|| EdgeListError::MissingWeight {
            line: line_number,
            target: target.to_owned(),
        })?;
        let weight = raw_weight
            .parse::<i64>()
            .map_err(|source| EdgeListError::InvalidWeight {
                line: line_number,
                value: (*raw_weight).to_owned(),
                source,
            })?;
        builder.add_edge(source, target, weight);
    }
    Ok(true)
}

fn require_label(label: &str, line: usize) -> Result<&str, EdgeListError> {
    if label.is_empty() {
        return Err(EdgeListError::EmptyLabel { line });
    }
    Ok(label)
}
