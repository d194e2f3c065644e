//! Optional query parameter encoding.
//!
//! Listing and search endpoints take a sparse set of optional filters. Each
//! set is declared once with [`filter_params!`](crate::filter_params) and
//! encoded through [`QueryString`], which skips unset fields and yields an
//! empty string when nothing is set.

use chrono::NaiveDate;
use url::form_urlencoded;

/// Formats a typed value as the text of a query parameter.
///
/// The returned text is not yet percent-encoded; [`QueryParams::encode`]
/// takes care of escaping.
pub trait QueryValue {
    /// Render the value as its unescaped wire text.
    fn to_query_value(&self) -> String;
}

impl QueryValue for str {
    fn to_query_value(&self) -> String {
        self.to_owned()
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl QueryValue for bool {
    fn to_query_value(&self) -> String {
        String::from(if *self { "true" } else { "false" })
    }
}

macro_rules! decimal_query_value {
    ($($ty:ty),+) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

decimal_query_value!(i32, i64, u32, u64);

impl QueryValue for NaiveDate {
    fn to_query_value(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl<T> QueryValue for &T
where
    T: QueryValue + ?Sized,
{
    fn to_query_value(&self) -> String {
        (**self).to_query_value()
    }
}

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair when the value is present.
    ///
    /// Each key may be pushed once; a repeated key is a programming error.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: QueryValue,
    {
        if let Some(value) = value {
            debug_assert!(
                self.pairs.iter().all(|(existing, _)| *existing != key),
                "query key `{key}` pushed twice"
            );
            self.pairs.push((key, value.to_query_value()));
        }
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize the pairs without the leading `?`.
    ///
    /// Pairs are joined with `&` in insertion order, in
    /// `application/x-www-form-urlencoded` form: spaces become `+`, reserved
    /// and non-ASCII bytes are percent-encoded. Empty when no pair was added.
    #[must_use]
    pub fn to_form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Serialize the pairs as a query string.
    ///
    /// Returns `""` when no pair was collected, otherwise `?` followed by
    /// [`to_form_body`](Self::to_form_body).
    #[must_use]
    pub fn encode(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }

        let query = format!("?{}", self.to_form_body());
        tracing::trace!(pairs = self.pairs.len(), query = %query, "encoded query string");
        query
    }
}

/// A set of optional filters that renders to a URL query string.
///
/// `Option<T>` implements this trait as well: `None` is the "no filters"
/// value and encodes to the empty string.
pub trait QueryString {
    /// Collect every set filter, in declaration order.
    fn query_params(&self) -> QueryParams;

    /// Encode the set filters as `?key=value&...`, or `""` when none is set.
    fn query_string(&self) -> String {
        self.query_params().encode()
    }
}

impl<T> QueryString for &T
where
    T: QueryString + ?Sized,
{
    fn query_params(&self) -> QueryParams {
        (**self).query_params()
    }
}

impl<T> QueryString for Option<T>
where
    T: QueryString,
{
    fn query_params(&self) -> QueryParams {
        match self {
            Some(params) => params.query_params(),
            None => QueryParams::new(),
        }
    }
}

/// Encode an optional filter set; `None` yields the empty string.
#[must_use]
pub fn encode_query<T>(params: Option<&T>) -> String
where
    T: QueryString + ?Sized,
{
    params.map_or_else(String::new, |params| params.query_string())
}

/// Returns true if any wire name appears more than once.
///
/// Evaluated in a `const` context by [`filter_params!`](crate::filter_params)
/// so a repeated key fails the build.
#[doc(hidden)]
#[must_use]
pub const fn has_duplicate_keys(keys: &[&str]) -> bool {
    let mut i = 0;
    while i < keys.len() {
        let mut j = i + 1;
        while j < keys.len() {
            if const_str_eq(keys[i], keys[j]) {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

const fn const_str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Declare a filter parameter set.
///
/// Each entry names a field, its value type and its wire name. The macro
/// generates a struct of `Option` fields, chained setters, a `KEYS`
/// constant and the [`QueryString`] impl that emits set fields in
/// declaration order. Value types must implement [`QueryValue`].
///
/// ```
/// bankapi_core::filter_params! {
///     /// Filters for `/widgets`.
///     pub struct WidgetListParams {
///         /// Name filter.
///         name: String => "name",
///         /// Page size.
///         max: i32 => "max",
///     }
/// }
///
/// use bankapi_core::QueryString;
///
/// let params = WidgetListParams::new().name("a b").max(0);
/// assert_eq!(params.query_string(), "?name=a+b&max=0");
/// assert_eq!(WidgetListParams::new().query_string(), "");
/// ```
#[macro_export]
macro_rules! filter_params {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, PartialEq, Eq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: ::core::option::Option<$ty>,
            )*
        }

        impl $name {
            /// Wire names of every filter, in encoding order.
            pub const KEYS: &'static [&'static str] = &[$($key),*];

            /// Create a parameter set with every filter unset.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            $(
                #[doc = ::core::concat!("Set the `", $key, "` filter.")]
                #[must_use]
                pub fn $field(mut self, value: impl ::core::convert::Into<$ty>) -> Self {
                    self.$field = ::core::option::Option::Some(value.into());
                    self
                }
            )*
        }

        const _: () = ::core::assert!(
            !$crate::query::has_duplicate_keys($name::KEYS),
            "duplicate query key in filter parameter set"
        );

        impl $crate::query::QueryString for $name {
            fn query_params(&self) -> $crate::query::QueryParams {
                let mut params = $crate::query::QueryParams::new();
                $(params.push_opt($key, self.$field.as_ref());)*
                params
            }
        }
    };
}
