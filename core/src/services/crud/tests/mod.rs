//! Tests for the ownership-scoped CRUD service
