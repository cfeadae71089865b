//! Database repository for CRUD operations.
//!
//! Uses prepared statements, and a transaction for the category delete
//! cascade.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Category, CreateCardRequest, CreateCategoryRequest, NavigationCard, SiteConfig,
    UpdateCardRequest, UpdateCategoryRequest, User,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== CATEGORY OPERATIONS ====================

    /// List categories ordered for display, with pagination.
    pub async fn list_categories(&self, skip: i64, limit: i64) -> Result<Vec<Category>, AppError> {
        let rows = sqlx::query(
            "SELECT id, slug, label, icon, sort_order, active, created_at, updated_at FROM categories ORDER BY sort_order, id LIMIT ? OFFSET ?"
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(category_from_row).collect())
    }

    /// List every category ordered for display.
    pub async fn list_all_categories(&self) -> Result<Vec<Category>, AppError> {
        let rows = sqlx::query(
            "SELECT id, slug, label, icon, sort_order, active, created_at, updated_at FROM categories ORDER BY sort_order, id"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(category_from_row).collect())
    }

    /// Count all categories.
    pub async fn count_categories(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM categories")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("count"))
    }

    /// Get a category by ID.
    pub async fn get_category(&self, id: i64) -> Result<Option<Category>, AppError> {
        let row = sqlx::query(
            "SELECT id, slug, label, icon, sort_order, active, created_at, updated_at FROM categories WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(category_from_row))
    }

    /// Get a category by slug.
    pub async fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>, AppError> {
        let row = sqlx::query(
            "SELECT id, slug, label, icon, sort_order, active, created_at, updated_at FROM categories WHERE slug = ?"
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(category_from_row))
    }

    /// Create a new category. The slug must not be in use.
    pub async fn create_category(
        &self,
        request: &CreateCategoryRequest,
    ) -> Result<Category, AppError> {
        if self.get_category_by_slug(&request.slug).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Category slug '{}' already exists",
                request.slug
            )));
        }

        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "INSERT INTO categories (slug, label, icon, sort_order, active, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&request.slug)
        .bind(&request.label)
        .bind(&request.icon)
        .bind(request.order)
        .bind(request.active as i32)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Category {
            id: result.last_insert_rowid(),
            slug: request.slug.clone(),
            label: request.label.clone(),
            icon: request.icon.clone(),
            order: request.order,
            active: request.active,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a category. Absent fields keep their current values.
    pub async fn update_category(
        &self,
        id: i64,
        request: &UpdateCategoryRequest,
    ) -> Result<Category, AppError> {
        let existing = self
            .get_category(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;

        // A changed slug must not collide with another category
        if let Some(slug) = &request.slug {
            if slug != &existing.slug && self.get_category_by_slug(slug).await?.is_some() {
                return Err(AppError::BadRequest(format!(
                    "Category slug '{}' already exists",
                    slug
                )));
            }
        }

        let now = Utc::now().to_rfc3339();

        let slug = request.slug.as_ref().unwrap_or(&existing.slug);
        let label = request.label.as_ref().unwrap_or(&existing.label);
        let icon = request.icon.as_ref().unwrap_or(&existing.icon);
        let order = request.order.unwrap_or(existing.order);
        let active = request.active.unwrap_or(existing.active);

        sqlx::query(
            "UPDATE categories SET slug = ?, label = ?, icon = ?, sort_order = ?, active = ?, updated_at = ? WHERE id = ?"
        )
        .bind(slug)
        .bind(label)
        .bind(icon)
        .bind(order)
        .bind(active as i32)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Category {
            id,
            slug: slug.clone(),
            label: label.clone(),
            icon: icon.clone(),
            order,
            active,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete a category and all cards that belong to it.
    pub async fn delete_category(&self, id: i64) -> Result<(), AppError> {
        // Cards are removed in the same transaction; dropping the
        // transaction without commit rolls the card deletes back when
        // the category turns out not to exist.
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM cards WHERE category_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }

    // ==================== CARD OPERATIONS ====================

    /// List cards ordered for display, optionally filtered by category,
    /// with pagination.
    pub async fn list_cards(
        &self,
        category_id: Option<i64>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<NavigationCard>, AppError> {
        let rows = match category_id {
            Some(category_id) => {
                sqlx::query(
                    "SELECT id, category_id, title, subtitle, description, icon, icon_bg_class, icon_color_class, href, sort_order, created_at, updated_at FROM cards WHERE category_id = ? ORDER BY sort_order, id LIMIT ? OFFSET ?"
                )
                .bind(category_id)
                .bind(limit)
                .bind(skip)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    "SELECT id, category_id, title, subtitle, description, icon, icon_bg_class, icon_color_class, href, sort_order, created_at, updated_at FROM cards ORDER BY sort_order, id LIMIT ? OFFSET ?"
                )
                .bind(limit)
                .bind(skip)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.iter().map(card_from_row).collect())
    }

    /// List every card ordered for display.
    pub async fn list_all_cards(&self) -> Result<Vec<NavigationCard>, AppError> {
        let rows = sqlx::query(
            "SELECT id, category_id, title, subtitle, description, icon, icon_bg_class, icon_color_class, href, sort_order, created_at, updated_at FROM cards ORDER BY sort_order, id"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(card_from_row).collect())
    }

    /// Get a card by ID.
    pub async fn get_card(&self, id: i64) -> Result<Option<NavigationCard>, AppError> {
        let row = sqlx::query(
            "SELECT id, category_id, title, subtitle, description, icon, icon_bg_class, icon_color_class, href, sort_order, created_at, updated_at FROM cards WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(card_from_row))
    }

    /// Create a new card. The referenced category must exist.
    pub async fn create_card(&self, request: &CreateCardRequest) -> Result<NavigationCard, AppError> {
        if self.get_category(request.category_id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "Category {} not found",
                request.category_id
            )));
        }

        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "INSERT INTO cards (category_id, title, subtitle, description, icon, icon_bg_class, icon_color_class, href, sort_order, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(request.category_id)
        .bind(&request.title)
        .bind(&request.subtitle)
        .bind(&request.description)
        .bind(&request.icon)
        .bind(&request.icon_bg_class)
        .bind(&request.icon_color_class)
        .bind(&request.href)
        .bind(request.order)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(NavigationCard {
            id: result.last_insert_rowid(),
            category_id: request.category_id,
            title: request.title.clone(),
            subtitle: request.subtitle.clone(),
            description: request.description.clone(),
            icon: request.icon.clone(),
            icon_bg_class: request.icon_bg_class.clone(),
            icon_color_class: request.icon_color_class.clone(),
            href: request.href.clone(),
            order: request.order,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a card. Absent fields keep their current values.
    pub async fn update_card(
        &self,
        id: i64,
        request: &UpdateCardRequest,
    ) -> Result<NavigationCard, AppError> {
        let existing = self
            .get_card(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Card {} not found", id)))?;

        // A changed category must exist
        if let Some(category_id) = request.category_id {
            if self.get_category(category_id).await?.is_none() {
                return Err(AppError::BadRequest(format!(
                    "Category {} not found",
                    category_id
                )));
            }
        }

        let now = Utc::now().to_rfc3339();

        let category_id = request.category_id.unwrap_or(existing.category_id);
        let title = request.title.as_ref().unwrap_or(&existing.title);
        let subtitle = request.subtitle.clone().or(existing.subtitle.clone());
        let description = request.description.as_ref().unwrap_or(&existing.description);
        let icon = request.icon.as_ref().unwrap_or(&existing.icon);
        let icon_bg_class = request
            .icon_bg_class
            .as_ref()
            .unwrap_or(&existing.icon_bg_class);
        let icon_color_class = request
            .icon_color_class
            .as_ref()
            .unwrap_or(&existing.icon_color_class);
        let href = request.href.as_ref().unwrap_or(&existing.href);
        let order = request.order.unwrap_or(existing.order);

        sqlx::query(
            "UPDATE cards SET category_id = ?, title = ?, subtitle = ?, description = ?, icon = ?, icon_bg_class = ?, icon_color_class = ?, href = ?, sort_order = ?, updated_at = ? WHERE id = ?"
        )
        .bind(category_id)
        .bind(title)
        .bind(&subtitle)
        .bind(description)
        .bind(icon)
        .bind(icon_bg_class)
        .bind(icon_color_class)
        .bind(href)
        .bind(order)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(NavigationCard {
            id,
            category_id,
            title: title.clone(),
            subtitle,
            description: description.clone(),
            icon: icon.clone(),
            icon_bg_class: icon_bg_class.clone(),
            icon_color_class: icon_color_class.clone(),
            href: href.clone(),
            order,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete a card.
    pub async fn delete_card(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM cards WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Card {} not found", id)));
        }

        Ok(())
    }

    // ==================== SITE CONFIG OPERATIONS ====================

    /// List all site config entries.
    pub async fn list_configs(&self) -> Result<Vec<SiteConfig>, AppError> {
        let rows = sqlx::query(
            "SELECT id, key, value, description, updated_at FROM site_configs ORDER BY key",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(config_from_row).collect())
    }

    /// Get a site config entry by key.
    pub async fn get_config(&self, key: &str) -> Result<Option<SiteConfig>, AppError> {
        let row = sqlx::query(
            "SELECT id, key, value, description, updated_at FROM site_configs WHERE key = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(config_from_row))
    }

    /// Set a site config value, creating the row if the key is new.
    pub async fn upsert_config(&self, key: &str, value: &str) -> Result<SiteConfig, AppError> {
        let now = Utc::now().to_rfc3339();

        if let Some(existing) = self.get_config(key).await? {
            sqlx::query("UPDATE site_configs SET value = ?, updated_at = ? WHERE key = ?")
                .bind(value)
                .bind(&now)
                .bind(key)
                .execute(&self.pool)
                .await?;

            Ok(SiteConfig {
                id: existing.id,
                key: existing.key,
                value: value.to_string(),
                description: existing.description,
                updated_at: now,
            })
        } else {
            let result = sqlx::query(
                "INSERT INTO site_configs (key, value, description, updated_at) VALUES (?, ?, NULL, ?)"
            )
            .bind(key)
            .bind(value)
            .bind(&now)
            .execute(&self.pool)
            .await?;

            Ok(SiteConfig {
                id: result.last_insert_rowid(),
                key: key.to_string(),
                value: value.to_string(),
                description: None,
                updated_at: now,
            })
        }
    }

    // ==================== USER OPERATIONS ====================

    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query(
            "SELECT id, username, hashed_password, is_active, is_superuser FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    /// Get a user by ID.
    pub async fn get_user(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            "SELECT id, username, hashed_password, is_active, is_superuser FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Get a user by username.
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            "SELECT id, username, hashed_password, is_active, is_superuser FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Create a new user from an already hashed password. The username
    /// must not be in use.
    pub async fn create_user(
        &self,
        username: &str,
        hashed_password: &str,
        is_active: bool,
        is_superuser: bool,
    ) -> Result<User, AppError> {
        if self.get_user_by_username(username).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Username '{}' already exists",
                username
            )));
        }

        let result = sqlx::query(
            "INSERT INTO users (username, hashed_password, is_active, is_superuser) VALUES (?, ?, ?, ?)"
        )
        .bind(username)
        .bind(hashed_password)
        .bind(is_active as i32)
        .bind(is_superuser as i32)
        .execute(&self.pool)
        .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: username.to_string(),
            hashed_password: hashed_password.to_string(),
            is_active,
            is_superuser,
        })
    }

    /// Update a user. Absent fields keep their current values; the
    /// password, when given, must already be hashed.
    pub async fn update_user(
        &self,
        id: i64,
        username: Option<&str>,
        hashed_password: Option<&str>,
        is_active: Option<bool>,
        is_superuser: Option<bool>,
    ) -> Result<User, AppError> {
        let existing = self
            .get_user(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        let username = username.unwrap_or(&existing.username);
        let hashed_password = hashed_password.unwrap_or(&existing.hashed_password);
        let is_active = is_active.unwrap_or(existing.is_active);
        let is_superuser = is_superuser.unwrap_or(existing.is_superuser);

        sqlx::query(
            "UPDATE users SET username = ?, hashed_password = ?, is_active = ?, is_superuser = ? WHERE id = ?"
        )
        .bind(username)
        .bind(hashed_password)
        .bind(is_active as i32)
        .bind(is_superuser as i32)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(User {
            id,
            username: username.to_string(),
            hashed_password: hashed_password.to_string(),
            is_active,
            is_superuser,
        })
    }

    /// Delete a user.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        Ok(())
    }
}

// Helper functions for row conversion

fn category_from_row(row: &sqlx::sqlite::SqliteRow) -> Category {
    let active: i32 = row.get("active");
    Category {
        id: row.get("id"),
        slug: row.get("slug"),
        label: row.get("label"),
        icon: row.get("icon"),
        order: row.get("sort_order"),
        active: active != 0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn card_from_row(row: &sqlx::sqlite::SqliteRow) -> NavigationCard {
    NavigationCard {
        id: row.get("id"),
        category_id: row.get("category_id"),
        title: row.get("title"),
        subtitle: row.get("subtitle"),
        description: row.get("description"),
        icon: row.get("icon"),
        icon_bg_class: row.get("icon_bg_class"),
        icon_color_class: row.get("icon_color_class"),
        href: row.get("href"),
        order: row.get("sort_order"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn config_from_row(row: &sqlx::sqlite::SqliteRow) -> SiteConfig {
    SiteConfig {
        id: row.get("id"),
        key: row.get("key"),
        value: row.get("value"),
        description: row.get("description"),
        updated_at: row.get("updated_at"),
    }
}

fn user_from_row(row: &sqlx::sqlite::SqliteRow) -> User {
    let is_active: i32 = row.get("is_active");
    let is_superuser: i32 = row.get("is_superuser");
    User {
        id: row.get("id"),
        username: row.get("username"),
        hashed_password: row.get("hashed_password"),
        is_active: is_active != 0,
        is_superuser: is_superuser != 0,
    }
}
