//! PyO3 wrapper for the built-in generators
//!
//! # Example (from Python)
//!
//! ```python
//! from stable_random_core import Generator, shuffle
//!
//! rng = Generator.xoroshiro128(42)
//! items = [0, 1, 2, 3, 4]
//! shuffle(items, rng)
//! assert items == [1, 3, 0, 2, 4]
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyList;

use crate::checkpoint::GeneratorSnapshot;
use crate::config::{Generator, GeneratorConfig};
use crate::rng::{RandomEngine, SplitMix64, Xoroshiro128};
use crate::sampling::{bounded_rand, StableShuffle};

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for [`Generator`]
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: Generator,
}

#[pymethods]
impl PyGenerator {
    #[staticmethod]
    fn splitmix64(seed: u64) -> Self {
        Self {
            inner: SplitMix64::new(seed).into(),
        }
    }

    #[staticmethod]
    fn xoroshiro128(seed: u64) -> Self {
        Self {
            inner: Xoroshiro128::new(seed).into(),
        }
    }

    /// Create a xoroshiro128 generator from explicit state words
    ///
    /// # Errors
    ///
    /// Raises ValueError if both words are zero.
    #[staticmethod]
    fn from_state(s0: u64, s1: u64) -> PyResult<Self> {
        if s0 == 0 && s1 == 0 {
            return Err(value_error("xoroshiro128 state must not be all zero"));
        }
        Ok(Self {
            inner: Xoroshiro128::from_state(s0, s1).into(),
        })
    }

    /// Create a generator from a JSON config string
    #[staticmethod]
    fn from_config(json: &str) -> PyResult<Self> {
        let config = GeneratorConfig::from_json(json).map_err(value_error)?;
        let inner = config.build().map_err(value_error)?;
        Ok(Self { inner })
    }

    /// Rebuild a generator from a snapshot JSON string
    #[staticmethod]
    fn restore(json: &str) -> PyResult<Self> {
        let snapshot: GeneratorSnapshot = serde_json::from_str(json).map_err(value_error)?;
        let inner = snapshot.restore().map_err(value_error)?;
        Ok(Self { inner })
    }

    fn next(&mut self) -> u64 {
        self.inner.next()
    }

    /// Draw uniformly from `[0, upper_bound)`
    fn bounded(&mut self, upper_bound: u64) -> PyResult<u64> {
        if upper_bound == 0 {
            return Err(value_error("upper_bound must be positive"));
        }
        Ok(bounded_rand(&mut self.inner, upper_bound))
    }

    /// Current state as a snapshot JSON string
    fn snapshot(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner.snapshot()).map_err(value_error)
    }

    #[getter]
    fn algorithm(&self) -> &'static str {
        self.inner.algorithm()
    }
}

/// Shuffle a Python list in place
///
/// # Errors
///
/// Raises ValueError if the list is empty.
#[pyfunction]
pub fn shuffle(items: &Bound<'_, PyList>, mut rng: PyRefMut<'_, PyGenerator>) -> PyResult<()> {
    let mut values: Vec<PyObject> = items.iter().map(|item| item.unbind()).collect();
    if values.is_empty() {
        return Err(value_error("cannot shuffle an empty sequence"));
    }

    values.stable_shuffle(&mut rng.inner);

    for (index, value) in values.into_iter().enumerate() {
        items.set_item(index, value)?;
    }
    Ok(())
}
