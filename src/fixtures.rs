/// Built-in sample graphs.
///
/// Edge tables keep the exact record order of the hand-built maps they come
/// from, reverse duplicates and asymmetric reverse weights included, so the
/// trees they produce are reproducible record for record.
use std::fmt;
use std::str::FromStr;

use crate::graph::Graph;

/// A named built-in graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    /// 12 nodes, unit weights along a ladder with heavier rungs
    World,
    /// 23 nodes, fractional weights
    Life,
    /// 8 nodes, weights from 1 to 25
    Work,
}

impl Fixture {
    pub const ALL: [Fixture; 3] = [Fixture::World, Fixture::Life, Fixture::Work];

    pub fn nodes(self) -> &'static [&'static str] {
        match self {
            Fixture::World => WORLD_NODES,
            Fixture::Life => LIFE_NODES,
            Fixture::Work => WORK_NODES,
        }
    }

    pub fn edges(self) -> &'static [(&'static str, &'static str, f64)] {
        match self {
            Fixture::World => WORLD_EDGES,
            Fixture::Life => LIFE_EDGES,
            Fixture::Work => WORK_EDGES,
        }
    }

    /// Materialize the fixture as an owned graph
    pub fn graph(self) -> Graph<String> {
        Graph::from_parts(
            self.nodes().iter().map(|n| n.to_string()),
            self.edges()
                .iter()
                .map(|&(from, to, weight)| (from.to_string(), to.to_string(), weight)),
        )
    }
}

impl FromStr for Fixture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "world" => Ok(Fixture::World),
            "life" => Ok(Fixture::Life),
            "work" => Ok(Fixture::Work),
            _ => Err(format!("Unknown built-in graph '{s}'. Use: world, life or work")),
        }
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fixture::World => write!(f, "world"),
            Fixture::Life => write!(f, "life"),
            Fixture::Work => write!(f, "work"),
        }
    }
}

const WORLD_NODES: &[&str] = &["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];

#[rustfmt::skip]
const WORLD_EDGES: &[(&str, &str, f64)] = &[
    ("A", "B", 1.0), ("A", "C", 1.0),
    ("B", "A", 1.0), ("B", "D", 1.0),
    ("C", "A", 1.0), ("C", "D", 2.0), ("C", "E", 1.0),
    ("D", "F", 1.0), ("D", "C", 2.0), ("D", "B", 1.0),
    ("E", "C", 1.0), ("E", "F", 3.0), ("E", "G", 1.0),
    ("F", "D", 1.0), ("F", "E", 3.0), ("F", "H", 1.0),
    ("G", "E", 1.0), ("G", "H", 4.0), ("G", "I", 1.0),
    ("H", "F", 1.0), ("H", "G", 4.0), ("H", "J", 1.0),
    ("I", "G", 1.0), ("I", "J", 5.0), ("I", "K", 1.0),
    ("J", "H", 1.0), ("J", "I", 5.0), ("J", "L", 1.0),
    ("K", "I", 1.0), ("K", "L", 6.0),
    ("L", "J", 1.0), ("L", "K", 6.0),
];

const LIFE_NODES: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W",
];

#[rustfmt::skip]
const LIFE_EDGES: &[(&str, &str, f64)] = &[
    ("A", "B", 2.0), ("A", "F", 3.0), ("A", "G", 6.0), ("A", "H", 7.0),
    ("B", "A", 2.0), ("B", "F", 2.0), ("B", "G", 3.0), ("B", "H", 4.0), ("B", "C", 2.0),
    ("C", "B", 2.0), ("C", "F", 3.0), ("C", "G", 2.0), ("C", "H", 2.0), ("C", "D", 2.0),
    ("D", "C", 2.0), ("D", "G", 3.0), ("D", "H", 2.0), ("D", "J", 2.0), ("D", "K", 3.0),
    ("D", "E", 1.0),
    ("E", "D", 1.0), ("E", "H", 3.0), ("E", "J", 3.0), ("E", "K", 2.0), ("E", "I", 0.5),
    ("E", "U", 6.0),
    ("F", "A", 3.0), ("F", "B", 2.0), ("F", "C", 3.0), ("F", "G", 2.0), ("F", "L", 4.5),
    ("G", "F", 2.0), ("G", "A", 6.0), ("G", "B", 3.0), ("G", "C", 2.0), ("G", "D", 3.0),
    ("G", "H", 1.0), ("G", "L", 2.0),
    ("H", "A", 1.0), ("H", "B", 4.0), ("H", "C", 1.0), ("H", "D", 1.0), ("H", "E", 4.0),
    ("H", "J", 1.0), ("H", "L", 4.0), ("H", "G", 1.0),
    ("I", "E", 0.5), ("I", "K", 1.0), ("I", "O", 2.0), ("I", "Q", 3.0), ("I", "V", 5.0),
    ("I", "U", 5.0),
    ("J", "H", 1.0), ("J", "D", 2.0), ("J", "E", 3.0), ("J", "K", 1.0), ("J", "M", 2.0),
    ("J", "N", 2.0), ("J", "L", 1.0),
    ("K", "J", 1.0), ("K", "D", 3.0), ("K", "E", 2.0), ("K", "I", 1.0), ("K", "O", 1.0),
    ("K", "M", 0.5),
    ("L", "F", 4.5), ("L", "G", 2.0), ("L", "H", 4.0), ("L", "J", 1.0), ("L", "M", 2.0),
    ("L", "N", 0.5),
    ("M", "N", 1.0), ("M", "L", 2.0), ("M", "J", 2.0), ("M", "K", 0.5), ("M", "O", 0.5),
    ("M", "R", 2.0), ("M", "P", 0.5),
    ("N", "L", 0.5), ("N", "J", 2.0), ("N", "M", 1.0), ("N", "P", 0.5),
    ("O", "M", 0.5), ("O", "K", 1.0), ("O", "I", 2.0), ("O", "Q", 1.0), ("O", "R", 1.0),
    ("O", "P", 1.0),
    ("P", "N", 0.5), ("P", "M", 0.5), ("P", "O", 1.0), ("P", "R", 1.0),
    ("Q", "I", 3.0), ("Q", "U", 4.0), ("Q", "W", 4.0), ("Q", "V", 3.0), ("Q", "T", 2.5),
    ("Q", "S", 1.0), ("Q", "R", 2.0), ("Q", "O", 1.0),
    ("R", "P", 1.0), ("R", "M", 2.0), ("R", "O", 1.0), ("R", "Q", 2.0), ("R", "S", 1.0),
    ("S", "R", 1.0), ("S", "Q", 1.0), ("S", "V", 3.0), ("S", "T", 2.0),
    ("T", "S", 2.0), ("T", "Q", 2.5), ("T", "V", 2.0), ("T", "W", 3.0),
    ("U", "E", 6.0), ("U", "I", 5.0), ("U", "Q", 4.0), ("U", "V", 0.5), ("U", "W", 0.25),
    ("V", "T", 2.0), ("V", "S", 3.0), ("V", "Q", 3.0), ("V", "I", 5.0), ("V", "U", 0.5),
    ("V", "W", 0.25),
    ("W", "T", 3.0), ("W", "V", 0.25), ("W", "Q", 4.0), ("W", "U", 0.25),
];

const WORK_NODES: &[&str] = &["A", "B", "C", "D", "E", "F", "G", "H"];

#[rustfmt::skip]
const WORK_EDGES: &[(&str, &str, f64)] = &[
    ("A", "H", 20.0), ("A", "G", 25.0), ("A", "D", 5.0), ("A", "B", 2.0), ("A", "C", 4.0),
    ("B", "A", 2.0), ("B", "C", 1.0), ("B", "E", 2.0), ("B", "D", 2.0), ("B", "H", 20.0),
    ("C", "A", 4.0), ("C", "B", 1.0), ("C", "E", 5.0),
    ("D", "A", 5.0), ("D", "B", 2.0), ("D", "E", 2.0), ("D", "F", 7.0), ("D", "G", 15.0),
    ("D", "H", 15.0),
    ("E", "C", 5.0), ("E", "B", 2.0), ("E", "D", 2.0), ("E", "H", 15.0), ("E", "F", 5.0),
    ("F", "E", 5.0), ("F", "D", 7.0), ("F", "H", 10.0), ("F", "G", 5.0),
    ("G", "F", 5.0), ("G", "D", 15.0), ("G", "A", 25.0), ("G", "H", 5.0),
    ("H", "A", 20.0), ("H", "B", 20.0), ("H", "D", 15.0), ("H", "E", 15.0), ("H", "F", 10.0),
    ("H", "G", 5.0),
];
