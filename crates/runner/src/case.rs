use std::{fs, path::Path};

use serde::{Deserialize, de::Error as _};
use toml::Table;

use crate::{Exercise, LoadError, Outcome};

/// A parsed case file.
///
/// ```toml
/// [[case]]
/// name = "first pair"
/// exercise = "pair-sum"
/// values = [2, 7, 11, 15]
/// target = 9
/// expected = [0, 1]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseFile {
    #[serde(default, rename = "case")]
    cases: Vec<Case>,
}

/// One checked invocation of an exercise.
///
/// The table's `name` key is split off and the remaining keys must form
/// exactly one [`Exercise`]; unknown keys are errors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Table")]
pub struct Case {
    /// Optional label shown in logs.
    pub name: Option<String>,

    pub exercise: Exercise,
}

impl TryFrom<Table> for Case {
    type Error = toml::de::Error;

    fn try_from(mut table: Table) -> Result<Self, Self::Error> {
        let name = match table.remove("name") {
            None => None,
            Some(toml::Value::String(name)) => Some(name),
            Some(other) => {
                return Err(toml::de::Error::custom(format!(
                    "case name must be a string, found {}",
                    other.type_str()
                )));
            }
        };
        let exercise: Exercise = toml::Value::Table(table).try_into()?;
        Ok(Self { name, exercise })
    }
}

impl CaseFile {
    /// Reads and parses the case file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Read`] if the file cannot be read and
    /// [`LoadError::Parse`] if it is not a valid case file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path.display().to_string())
    }

    /// Parses case file contents.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] if `text` is not a valid case file.
    pub fn from_toml(text: &str) -> Result<Self, LoadError> {
        Self::parse(text, "<inline>".to_owned())
    }

    fn parse(text: &str, origin: String) -> Result<Self, LoadError> {
        toml::from_str(text).map_err(|source| LoadError::Parse { origin, source })
    }

    #[must_use]
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// Checks every case, in file order.
    pub fn check_all(&self) -> impl Iterator<Item = (&Case, Outcome)> {
        self.cases.iter().map(|case| (case, case.check()))
    }
}

impl Case {
    /// Returns the case's name, or the exercise name if it has none.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(self.exercise.name())
    }

    #[must_use]
    pub fn check(&self) -> Outcome {
        self.exercise.check()
    }
}
