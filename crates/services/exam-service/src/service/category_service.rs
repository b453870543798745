//! Category service - plain CRUD over categories.

use domain::Category;

use super::crud::{CrudFacade, CrudService};
use crate::repository::CategoryRepository;

/// Category service trait for dependency injection.
pub trait CategoryService: CrudService<Category> {}

impl<R: CategoryRepository + ?Sized> CategoryService for CrudFacade<Category, R> {}

/// Concrete category service
pub type CategoryManager = CrudFacade<Category, dyn CategoryRepository>;
