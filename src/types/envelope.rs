//! Paginated response envelope shared by the metadata REST family.
//!
//! Collection endpoints wrap their entities in a common shape: a self
//! link, an entry count, and the page of items. Single-entity endpoints
//! return the bare record instead. [`Listing`] models the wrapped
//! shape; [`RestResponse`] decodes a payload of either shape,
//! discriminating on the presence of the top-level `count` key.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::types::lenient;
use crate::Result;

/// One page of entities inside the shared response envelope.
///
/// Every field is optional and passes through encode and decode
/// unchanged; this type adds no interpretation beyond
/// [`into_items`](Self::into_items). `count` accepts quoted and
/// unquoted integer forms, the same leniency the entity's own integer
/// fields get.
///
/// # Examples
///
/// ```
/// use fstore_metadata::{Code, Listing};
///
/// let listing: Listing<Code> = serde_json::from_str(
///     r#"{"href":"https://host/project/14/code","count":1,"items":[{"commitTime":42}]}"#,
/// )
/// .unwrap();
/// assert_eq!(listing.count, Some(1));
/// assert_eq!(listing.into_items(), vec![Code::default().with_commit_time(42)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Listing<T> {
    /// Self link reported by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Total number of entries the server reports for the collection.
    #[serde(
        default,
        deserialize_with = "lenient::opt_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub count: Option<i64>,

    /// The page of entities, when the server included one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<T>>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            href: None,
            count: None,
            items: None,
        }
    }
}

impl<T> Listing<T> {
    /// Flattens the envelope into its entries.
    ///
    /// A reported `count` of zero yields an empty vector without
    /// consulting `items`. A missing `count` defers to whatever `items`
    /// holds. A positive `count` with no `items` array is a server
    /// anomaly: it logs a warning and yields an empty vector.
    pub fn into_items(self) -> Vec<T> {
        match self.count {
            Some(0) => Vec::new(),
            Some(count) => match self.items {
                Some(items) => items,
                None => {
                    tracing::warn!(count, "listing advertised entries but carried no items");
                    Vec::new()
                }
            },
            None => self.items.unwrap_or_default(),
        }
    }
}

/// A decoded metadata service payload: either a bare entity or a
/// listing of them.
///
/// The service returns the two shapes from different endpoints but does
/// not tag them; the discriminator is the top-level `count` key. Any
/// payload whose root object carries `count` is a [`Listing`],
/// everything else is decoded as the entity itself.
///
/// # Examples
///
/// ```
/// use fstore_metadata::{Code, RestResponse};
///
/// let single = RestResponse::<Code>::from_json(r#"{"commitTime":42}"#).unwrap();
/// assert!(matches!(single, RestResponse::Entity(_)));
///
/// let listing = RestResponse::<Code>::from_json(r#"{"count":0}"#).unwrap();
/// assert!(matches!(listing, RestResponse::Listing(_)));
/// assert_eq!(listing.into_items(), Vec::<Code>::new());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RestResponse<T> {
    /// A single entity returned bare.
    Entity(T),
    /// A page of entities inside the envelope.
    Listing(Listing<T>),
}

impl<T: DeserializeOwned> RestResponse<T> {
    /// Decodes a payload from its JSON text.
    pub fn from_json(payload: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(payload)?;
        Self::from_value(value)
    }

    /// Decodes a payload from an already-parsed JSON value.
    ///
    /// The shape is chosen by key presence alone: an explicit
    /// `"count": null` still selects the listing shape.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if value.get("count").is_some() {
            Ok(Self::Listing(serde_json::from_value(value)?))
        } else {
            Ok(Self::Entity(serde_json::from_value(value)?))
        }
    }
}

impl<T> RestResponse<T> {
    /// Flattens the response into a vector of entities.
    ///
    /// A bare entity yields exactly one element; a listing flattens via
    /// [`Listing::into_items`].
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Entity(entity) => vec![entity],
            Self::Listing(listing) => listing.into_items(),
        }
    }
}
