/// A line/column position within an executable document. Both fields are
/// 1-based, matching the `locations` entries of a GraphQL response error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Position {
    pub line: usize,
    #[serde(rename = "column")]
    pub col: usize,
}
impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
