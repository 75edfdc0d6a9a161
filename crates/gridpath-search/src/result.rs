use gridpath_core::Cell;

/// The two ordered sequences a search hands to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Every finalized cell, in exploration order, without duplicates.
    pub visited: Vec<Cell>,
    /// Route from the cell after start through end; empty if end was not
    /// reached.
    pub path: Vec<Cell>,
}

/// How a [`SearchResult`] should be read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing ran (unknown algorithm name).
    NotRun,
    /// The search ran but produced no route.
    NoPath,
    /// A route was found.
    Found,
}

impl SearchResult {
    /// Classify the result.
    pub fn outcome(&self) -> Outcome {
        if !self.path.is_empty() {
            Outcome::Found
        } else if self.visited.is_empty() {
            Outcome::NotRun
        } else {
            Outcome::NoPath
        }
    }

    /// Whether both sequences are empty.
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty() && self.path.is_empty()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn json_shape() {
        let r = SearchResult {
            visited: vec![Cell::new(0, 0), Cell::new(0, 1)],
            path: vec![Cell::new(0, 1)],
        };
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(
            json,
            r#"{"visited":[{"row":0,"col":0},{"row":0,"col":1}],"path":[{"row":0,"col":1}]}"#
        );
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
