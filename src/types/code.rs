//! The code provenance record and its run-origin enumeration.
//!
//! [`Code`] describes one execution of user code against a feature
//! group: when it ran, which feature-group commit it corresponds to,
//! the application instance that ran it, and optionally the executed
//! source text itself.
//!
//! # Serialization
//!
//! Fields use `camelCase` naming on the wire. Absent fields are omitted
//! on encode; on decode an omitted key and an explicit `null` are
//! equivalent. Unknown keys are ignored, so servers can add fields
//! without breaking older clients. The two integer fields accept both
//! quoted (`"42"`) and unquoted (`42`) forms.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::lenient;

/// Provenance record for one code execution against a feature group.
///
/// All four fields are independently optional and no cross-field
/// invariant is enforced: a record may carry any combination of them.
/// The value owns its fields outright and performs no I/O; share it
/// across threads as effectively immutable or synchronize externally.
///
/// # Examples
///
/// ```
/// use fstore_metadata::Code;
///
/// let code = Code::for_run(1_700_000_000_000, "application_1700000000000_0001");
/// let json = serde_json::to_value(&code).unwrap();
/// assert_eq!(json["commitTime"], 1_700_000_000_000i64);
/// assert_eq!(json["applicationId"], "application_1700000000000_0001");
/// assert!(json.get("featureGroupCommitId").is_none());
/// assert!(json.get("content").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Code {
    /// Wall-clock time of the execution, in milliseconds since the Unix
    /// epoch.
    #[serde(
        default,
        deserialize_with = "lenient::opt_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub commit_time: Option<i64>,

    /// Feature-group commit this execution is associated with.
    #[serde(
        default,
        deserialize_with = "lenient::opt_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub feature_group_commit_id: Option<i64>,

    /// Identifier the compute platform assigned to the application
    /// instance that executed the code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,

    /// Verbatim source text of the executed code, when retained. No size
    /// cap is enforced here and the text is never truncated; payload
    /// limits belong to the surrounding transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Code {
    /// Creates a record with all four fields supplied in declaration
    /// order and stored verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use fstore_metadata::Code;
    ///
    /// let code = Code::new(
    ///     Some(42),
    ///     Some(7),
    ///     Some("app-7".to_string()),
    ///     Some("print('hi')".to_string()),
    /// );
    /// assert_eq!(code.commit_time, Some(42));
    /// assert_eq!(code.feature_group_commit_id, Some(7));
    /// assert_eq!(code.application_id.as_deref(), Some("app-7"));
    /// assert_eq!(code.content.as_deref(), Some("print('hi')"));
    /// ```
    pub fn new(
        commit_time: Option<i64>,
        feature_group_commit_id: Option<i64>,
        application_id: Option<String>,
        content: Option<String>,
    ) -> Self {
        Self {
            commit_time,
            feature_group_commit_id,
            application_id,
            content,
        }
    }

    /// Creates the minimal record for an observed run: execution time
    /// and application id only.
    ///
    /// This is the canonical form produced when a client records that an
    /// application ran at a given time without yet associating a
    /// feature-group commit or capturing the source text.
    ///
    /// # Examples
    ///
    /// ```
    /// use fstore_metadata::Code;
    ///
    /// let code = Code::for_run(1_700_000_000_000, "application_1700000000000_0001");
    /// assert_eq!(code.commit_time, Some(1_700_000_000_000));
    /// assert_eq!(
    ///     code.application_id.as_deref(),
    ///     Some("application_1700000000000_0001"),
    /// );
    /// assert!(code.feature_group_commit_id.is_none());
    /// assert!(code.content.is_none());
    /// ```
    pub fn for_run(commit_time: i64, application_id: impl Into<String>) -> Self {
        Self {
            commit_time: Some(commit_time),
            application_id: Some(application_id.into()),
            ..Self::default()
        }
    }

    /// Sets the execution time in milliseconds since the Unix epoch.
    pub fn with_commit_time(mut self, commit_time: i64) -> Self {
        self.commit_time = Some(commit_time);
        self
    }

    /// Sets the execution time from a UTC instant, stored as epoch
    /// milliseconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use fstore_metadata::Code;
    ///
    /// let at = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
    /// let code = Code::default().with_commit_time_utc(at);
    /// assert_eq!(code.commit_time, Some(1_700_000_000_000));
    /// ```
    pub fn with_commit_time_utc(mut self, at: DateTime<Utc>) -> Self {
        self.commit_time = Some(at.timestamp_millis());
        self
    }

    /// Sets the associated feature-group commit id.
    pub fn with_feature_group_commit_id(mut self, feature_group_commit_id: i64) -> Self {
        self.feature_group_commit_id = Some(feature_group_commit_id);
        self
    }

    /// Sets the executing application's platform-assigned identifier.
    pub fn with_application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = Some(application_id.into());
        self
    }

    /// Sets the retained source text.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Returns the execution time as a UTC instant.
    ///
    /// `None` when the field is absent or when the millisecond value
    /// falls outside the representable `DateTime` range.
    ///
    /// # Examples
    ///
    /// ```
    /// use fstore_metadata::Code;
    ///
    /// let code = Code::for_run(1_700_000_000_000, "app-1");
    /// let at = code.commit_time_utc().unwrap();
    /// assert_eq!(at.timestamp_millis(), 1_700_000_000_000);
    ///
    /// assert!(Code::default().commit_time_utc().is_none());
    /// ```
    pub fn commit_time_utc(&self) -> Option<DateTime<Utc>> {
        self.commit_time.and_then(DateTime::from_timestamp_millis)
    }
}

/// Execution environment that produced a [`Code`] record.
///
/// Closed set: decoding any name other than the three below is an
/// error, and no ordinal semantics are exported. On the wire each
/// variant is its name in uppercase ASCII.
///
/// # Examples
///
/// ```
/// use fstore_metadata::RunType;
///
/// let json = serde_json::to_value(RunType::Databricks).unwrap();
/// assert_eq!(json, "DATABRICKS");
///
/// let back: RunType = serde_json::from_value(json).unwrap();
/// assert_eq!(back, RunType::Databricks);
///
/// assert!(serde_json::from_str::<RunType>("\"SPARK\"").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunType {
    /// Interactive notebook session.
    Jupyter,
    /// Scheduled or submitted batch job.
    Job,
    /// Managed analytics workspace run.
    Databricks,
}

impl fmt::Display for RunType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jupyter => write!(f, "JUPYTER"),
            Self::Job => write!(f, "JOB"),
            Self::Databricks => write!(f, "DATABRICKS"),
        }
    }
}
