//! Job record model and the input shapes used to create and patch it.
//!
//! [`Job`] is the canonical record owned by the store. [`NewJob`] carries the
//! caller-supplied fields for creation, and [`JobPatch`] describes a partial
//! update with one [`FieldUpdate`] per attribute.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Store-assigned job identifier. Monotonic, never reused.
pub type JobId = u64;

/// A job listing with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Assigned by the store at creation; immutable afterwards.
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub region: String,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
}

impl Job {
    /// Builds a record from creation fields and an already-assigned id.
    #[must_use]
    pub fn from_new(id: JobId, fields: NewJob) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            region: fields.region,
            min_salary: fields.min_salary,
            max_salary: fields.max_salary,
        }
    }

    /// Applies every `Set` field of `patch` in place. `id` is untouched.
    pub fn apply(&mut self, patch: JobPatch) {
        patch.title.apply_to(&mut self.title);
        patch.description.apply_to(&mut self.description);
        patch.region.apply_to(&mut self.region);
        patch.min_salary.apply_to(&mut self.min_salary);
        patch.max_salary.apply_to(&mut self.max_salary);
    }
}

/// Fields supplied when creating a job. Everything except `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub region: String,
    #[serde(default)]
    pub min_salary: Option<f64>,
    #[serde(default)]
    pub max_salary: Option<f64>,
}

impl NewJob {
    /// Creation fields without salary information.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            region: region.into(),
            min_salary: None,
            max_salary: None,
        }
    }

    /// Sets the salary range. Either bound may be `None`.
    #[must_use]
    pub fn with_salary(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_salary = min;
        self.max_salary = max;
        self
    }
}

/// Per-field update instruction.
///
/// Over serde, an omitted field becomes [`FieldUpdate::Keep`] through
/// `#[serde(default)]`, and any present value (including `null` when `T` is
/// an `Option`) becomes [`FieldUpdate::Set`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate<T> {
    /// Leave the current value as is.
    Keep,
    /// Replace the current value.
    Set(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> FieldUpdate<T> {
    /// Returns `true` for [`FieldUpdate::Keep`].
    #[must_use]
    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }

    /// Writes the new value into `target` when this is `Set`.
    pub fn apply_to(self, target: &mut T) {
        if let Self::Set(value) = self {
            *target = value;
        }
    }
}

impl<T> From<T> for FieldUpdate<T> {
    fn from(value: T) -> Self {
        Self::Set(value)
    }
}

impl<T: Serialize> Serialize for FieldUpdate<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Set(value) => value.serialize(serializer),
            // Callers skip `Keep` fields; a lone `Keep` has nothing to say.
            Self::Keep => serializer.serialize_unit(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldUpdate<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::Set)
    }
}

/// Partial update for a job. Every field defaults to `Keep`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobPatch {
    #[serde(default, skip_serializing_if = "FieldUpdate::is_keep")]
    pub title: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_keep")]
    pub description: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_keep")]
    pub region: FieldUpdate<String>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_keep")]
    pub min_salary: FieldUpdate<Option<f64>>,
    #[serde(default, skip_serializing_if = "FieldUpdate::is_keep")]
    pub max_salary: FieldUpdate<Option<f64>>,
}

impl JobPatch {
    /// Returns `true` when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_keep()
            && self.description.is_keep()
            && self.region.is_keep()
            && self.min_salary.is_keep()
            && self.max_salary.is_keep()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Job {
        Job::from_new(
            7,
            NewJob::new("Backend Engineer", "Remote", "Berlin").with_salary(Some(50_000.0), None),
        )
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut job = sample();
        let before = job.clone();
        let patch = JobPatch::default();
        assert!(patch.is_empty());

        job.apply(patch);
        assert_eq!(job, before);
    }

    #[test]
    fn patch_only_touches_set_fields() {
        let mut job = sample();
        job.apply(JobPatch {
            region: "Lisbon".to_string().into(),
            ..JobPatch::default()
        });

        assert_eq!(job.id, 7);
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.description, "Remote");
        assert_eq!(job.region, "Lisbon");
        assert_eq!(job.min_salary, Some(50_000.0));
        assert_eq!(job.max_salary, None);
    }

    #[test]
    fn set_none_clears_a_salary() {
        let mut job = sample();
        job.apply(JobPatch {
            min_salary: FieldUpdate::Set(None),
            ..JobPatch::default()
        });
        assert_eq!(job.min_salary, None);
    }

    #[test]
    fn patch_json_distinguishes_omitted_from_null() {
        let patch: JobPatch =
            serde_json::from_str(r#"{"title":"Lead","min_salary":null}"#).unwrap();

        assert_eq!(patch.title, FieldUpdate::Set("Lead".to_string()));
        assert_eq!(patch.description, FieldUpdate::Keep);
        assert_eq!(patch.min_salary, FieldUpdate::Set(None));
        assert_eq!(patch.max_salary, FieldUpdate::Keep);
    }

    #[test]
    fn patch_json_rejects_null_for_required_text() {
        let result: Result<JobPatch, _> = serde_json::from_str(r#"{"title":null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = JobPatch {
            max_salary: FieldUpdate::Set(Some(90_000.0)),
            ..JobPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "max_salary": 90000.0 }));
    }

    #[test]
    fn new_job_salaries_default_to_none() {
        let fields: NewJob =
            serde_json::from_str(r#"{"title":"t","description":"d","region":"r"}"#).unwrap();
        assert_eq!(fields.min_salary, None);
        assert_eq!(fields.max_salary, None);
    }

    #[test]
    fn job_serializes_with_snake_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["min_salary"], 50000.0);
        assert!(json["max_salary"].is_null());
    }
}
