//! Post validation rules for each write path.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use crate::domain::Post;
use crate::domain::post::fields;
use crate::error::PostValidationError;
use crate::ports::Clock;
use crate::validation::{
    Rule, is_invalid_date, is_invalid_id, is_invalid_text, is_not_recent, is_not_same, is_same,
    validate,
};

/// Validates posts before they reach storage.
///
/// Stateless apart from the clock; every call builds its own violation record,
/// so one validator can be shared freely across tasks.
#[derive(Clone)]
pub struct PostValidator {
    clock: Arc<dyn Clock>,
}

impl PostValidator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Fail with `NullPost` when there is nothing to validate.
    pub fn ensure_present(post: Option<&Post>) -> Result<&Post, PostValidationError> {
        post.ok_or(PostValidationError::NullPost)
    }

    /// A new post needs every field, matching timestamps and a fresh creation date.
    pub fn validate_on_add(&self, post: Option<&Post>) -> Result<(), PostValidationError> {
        let post = Self::ensure_present(post)?;

        validate([
            (is_invalid_id(post.id), fields::ID),
            (is_invalid_text(&post.title), fields::TITLE),
            (is_invalid_text(&post.sub_title), fields::SUB_TITLE),
            (is_invalid_text(&post.content), fields::CONTENT),
            (is_invalid_text(&post.author), fields::AUTHOR),
            (is_invalid_date(post.created_date), fields::CREATED_DATE),
            (is_invalid_date(post.updated_date), fields::UPDATED_DATE),
            (
                is_not_same(post.updated_date, post.created_date, fields::CREATED_DATE),
                fields::UPDATED_DATE,
            ),
            (self.is_not_recent(post.created_date), fields::CREATED_DATE),
        ])?;

        Ok(())
    }

    /// A modified post must carry a fresh updated date that differs from its creation date.
    ///
    /// Title and subtitle are not re-checked here.
    pub fn validate_on_modify(&self, post: Option<&Post>) -> Result<(), PostValidationError> {
        let post = Self::ensure_present(post)?;

        validate([
            (is_invalid_id(post.id), fields::ID),
            (is_invalid_text(&post.content), fields::CONTENT),
            (is_invalid_text(&post.author), fields::AUTHOR),
            (is_invalid_date(post.created_date), fields::CREATED_DATE),
            (is_invalid_date(post.updated_date), fields::UPDATED_DATE),
            (self.is_not_recent(post.updated_date), fields::UPDATED_DATE),
            (
                is_same(post.updated_date, post.created_date, fields::CREATED_DATE),
                fields::UPDATED_DATE,
            ),
        ])?;

        Ok(())
    }

    /// Compare an incoming post with the stored copy it replaces.
    ///
    /// The creation date must be unchanged, and the incoming updated date must
    /// still be the stored one. Must run before a new updated date is assigned.
    /// The two checks report independently.
    pub fn validate_against_storage_on_modify(
        &self,
        input_post: &Post,
        storage_post: &Post,
    ) -> Result<(), PostValidationError> {
        validate([(
            is_not_same(
                input_post.created_date,
                storage_post.created_date,
                fields::CREATED_DATE,
            ),
            fields::CREATED_DATE,
        )])?;

        validate([(
            is_not_same(
                input_post.updated_date,
                storage_post.updated_date,
                fields::UPDATED_DATE,
            ),
            fields::UPDATED_DATE,
        )])?;

        Ok(())
    }

    pub fn validate_identifier(&self, post_id: Uuid) -> Result<(), PostValidationError> {
        validate([(is_invalid_id(post_id), fields::ID)])?;
        Ok(())
    }

    /// Unwrap a storage lookup, failing with `NotFoundPost` when nothing was stored.
    pub fn validate_stored_entity(
        &self,
        maybe_post: Option<Post>,
        post_id: Uuid,
    ) -> Result<Post, PostValidationError> {
        maybe_post.ok_or(PostValidationError::NotFoundPost { id: post_id })
    }

    fn is_not_recent(&self, date: DateTime<FixedOffset>) -> Rule {
        is_not_recent(date, self.clock.now())
    }
}
