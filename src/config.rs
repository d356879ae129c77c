//! Configuration for the `treecheck` binary: the bounds and conventions to
//! validate with and how to generate the tree being validated. Every key is
//! optional.
//!
//! ```toml
//! [bounds]
//! value_low = 0
//! value_high = 100
//! height_low = 1
//! height_high = 5
//!
//! [policy]
//! height = "edges"      # or "nodes"
//! duplicates = "allow"  # or "reject"
//!
//! [generator]
//! size = 1000
//! seed = 42
//! shape = "heap"        # "random", "bst", "heap" or "chain"
//! value_low = 0
//! value_high = 100000
//! ```

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::tree::Tree;
use crate::validate::{Bounds, Policy, Validator};

/// Everything the binary can be configured with.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// What trees are validated against.
    pub bounds: BoundsConfig,
    /// Which conventions the validator applies.
    pub policy: Policy,
    /// How trees are generated.
    pub generator: Generator,
}

impl Config {
    /// Reads the configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| Error::Parse {
            path: path.to_owned(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parses the configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// A validator for the configured bounds and policy.
    pub fn validator(&self) -> Validator<i32> {
        Validator::with_policy(self.bounds.into(), self.policy)
    }
}

/// The `[bounds]` table. Unset keys don't constrain anything.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct BoundsConfig {
    /// See [`Bounds::value_low`].
    pub value_low: i32,
    /// See [`Bounds::value_high`].
    pub value_high: i32,
    /// See [`Bounds::height_low`].
    pub height_low: isize,
    /// See [`Bounds::height_high`].
    pub height_high: isize,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            value_low: i32::MIN,
            value_high: i32::MAX,
            height_low: isize::MIN,
            height_high: isize::MAX,
        }
    }
}

impl From<BoundsConfig> for Bounds<i32> {
    fn from(b: BoundsConfig) -> Self {
        Bounds::new(b.value_low, b.value_high, b.height_low, b.height_high)
    }
}

/// The shapes of tree the [`Generator`] can build.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Values dropped into random free slots.
    #[default]
    Random,
    /// Values inserted into an unbalanced binary search tree.
    Bst,
    /// Sorted values laid out as a complete min-heap.
    Heap,
    /// Sorted values in a single right-leaning chain.
    Chain,
}

/// The `[generator]` table.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Generator {
    /// How many nodes to generate.
    pub size: usize,
    /// Seed for the random number generator. Without one every run differs.
    pub seed: Option<u64>,
    /// The shape of tree to build.
    pub shape: Shape,
    /// Smallest value to generate (inclusive).
    pub value_low: i32,
    /// Largest value to generate (inclusive).
    pub value_high: i32,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            size: 1000,
            seed: None,
            shape: Shape::default(),
            value_low: 0,
            value_high: 100_000,
        }
    }
}

impl Generator {
    /// Generates a tree of the configured shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use treecheck::config::{Generator, Shape};
    ///
    /// let generator = Generator {
    ///     size: 100,
    ///     seed: Some(1),
    ///     shape: Shape::Chain,
    ///     ..Generator::default()
    /// };
    /// let tree = generator.build().unwrap();
    ///
    /// assert_eq!(tree.height(), 100);
    /// ```
    pub fn build(&self) -> Result<Tree<i32>> {
        if self.value_low > self.value_high {
            return Err(Error::InvalidRange {
                what: "generator value",
                low: self.value_low.into(),
                high: self.value_high.into(),
            });
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut values = (0..self.size)
            .map(|_| rng.gen_range(self.value_low..=self.value_high))
            .collect::<Vec<_>>();

        let tree = match self.shape {
            Shape::Random => {
                let mut tree = Tree::new();
                for value in values {
                    tree.insert_random(value, &mut rng);
                }
                tree
            }
            Shape::Bst => {
                let mut tree = Tree::new();
                for value in values {
                    tree.insert(value);
                }
                tree
            }
            Shape::Heap => {
                values.sort_unstable();
                Tree::from_level_order(values)
            }
            Shape::Chain => {
                values.sort_unstable();
                Tree::chain(values)
            }
        };

        tracing::debug!(size = self.size, shape = ?self.shape, seed = ?self.seed, "generated tree");
        Ok(tree)
    }
}
