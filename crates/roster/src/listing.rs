//! Listing parameters and the query builder.
//!
//! [`ListingParams::build`] is the single translation point from caller
//! inputs to a [`QueryDescription`]. It is a pure function: no I/O, no
//! shared state, and identical inputs always produce structurally identical
//! descriptions.

use roster_sql::{Expr, SelectQuery, SortDir};

use crate::record::{SELECT_COLUMNS, TABLE, columns};
use crate::{Error, Result};

/// A recognized sort field.
///
/// Sorting is a closed enumeration rather than a free-form column string;
/// anything outside it resolves to the default ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Email,
    CreatedDate,
}

impl SortField {
    /// Parse a caller-supplied sort hint.
    ///
    /// Returns `None` for anything unrecognized; a bad hint is not an
    /// error, the listing falls back to ordering by `id` ascending.
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "created_date" => Some(Self::CreatedDate),
            _ => None,
        }
    }

    /// The column this field sorts on.
    pub fn column(self) -> &'static str {
        match self {
            Self::Name => columns::NAME,
            Self::Email => columns::EMAIL,
            Self::CreatedDate => columns::CREATED_DATE,
        }
    }
}

/// Parameters for listing users.
///
/// `limit` and `offset` are signed on purpose: callers arrive with
/// untrusted integers, and the contract is to reject negative values at
/// [`build`](Self::build) time rather than make them unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingParams {
    /// Substring filter on the name column, if any.
    pub filter: Option<String>,
    /// Include inactive users. When false, only active users are listed.
    pub include_inactive: bool,
    /// Recognized sort field, if any. `None` sorts by `id` ascending.
    pub sort: Option<SortField>,
    /// Sort direction for a recognized sort field.
    pub ascending: bool,
    /// Page size. Must be non-negative; no implicit cap is applied.
    pub limit: i64,
    /// Rows to skip. Must be non-negative.
    pub offset: i64,
}

impl ListingParams {
    /// Create listing parameters for a page.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            filter: None,
            include_inactive: false,
            sort: None,
            ascending: true,
            limit,
            offset,
        }
    }

    /// Set the name filter.
    pub fn filter(mut self, fragment: impl Into<String>) -> Self {
        self.filter = Some(fragment.into());
        self
    }

    /// Include inactive users in the listing.
    pub fn include_inactive(mut self, include: bool) -> Self {
        self.include_inactive = include;
        self
    }

    /// Sort by a recognized field.
    pub fn sort_by(mut self, field: SortField) -> Self {
        self.sort = Some(field);
        self
    }

    /// Sort by a caller-supplied hint; unrecognized hints are ignored.
    pub fn sort_hint(mut self, hint: &str) -> Self {
        self.sort = SortField::from_hint(hint);
        self
    }

    /// Sort descending instead of ascending.
    pub fn descending(mut self) -> Self {
        self.ascending = false;
        self
    }

    /// Translate these parameters into a query description.
    ///
    /// The only failure is [`Error::InvalidArgument`] for a negative
    /// `limit` or `offset`; every other malformed input degrades to a safe
    /// default.
    pub fn build(&self) -> Result<QueryDescription> {
        if self.limit < 0 {
            return Err(Error::InvalidArgument(format!(
                "limit must be non-negative, got {}",
                self.limit
            )));
        }
        if self.offset < 0 {
            return Err(Error::InvalidArgument(format!(
                "offset must be non-negative, got {}",
                self.offset
            )));
        }

        let mut predicates = Vec::new();

        if let Some(fragment) = self.filter.as_deref() {
            if !fragment.is_empty() {
                predicates.push(Expr::contains(columns::NAME, fragment));
            }
        }

        if !self.include_inactive {
            predicates.push(Expr::eq(columns::ACTIVE, true));
        }

        // Direction only applies to a recognized sort field; the fallback
        // ordering is always id ascending.
        let order = match self.sort {
            Some(field) => (
                field.column(),
                if self.ascending {
                    SortDir::Asc
                } else {
                    SortDir::Desc
                },
            ),
            None => (columns::ID, SortDir::Asc),
        };

        Ok(QueryDescription {
            predicates,
            order,
            limit: self.limit as u64,
            offset: self.offset as u64,
        })
    }
}

/// A deterministic, injection-safe description of a listing query.
///
/// Predicates are kept in append order so the description (and the SQL
/// rendered from it) is reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDescription {
    /// WHERE predicates, each carrying its bound values.
    pub predicates: Vec<Expr>,
    /// ORDER BY column and direction. Always present.
    pub order: (&'static str, SortDir),
    /// LIMIT, exactly as the caller supplied it.
    pub limit: u64,
    /// OFFSET, exactly as the caller supplied it.
    pub offset: u64,
}

impl QueryDescription {
    /// Lower the description to a SELECT over the user table.
    pub fn into_select(self) -> SelectQuery {
        let (col, dir) = self.order;
        let mut select = SelectQuery::new(TABLE)
            .columns(SELECT_COLUMNS)
            .order_by(col, dir)
            .limit(self.limit)
            .offset(self.offset);
        for predicate in self.predicates {
            select = select.filter(predicate);
        }
        select
    }
}
