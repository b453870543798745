//! Service layer - business logic over repository traits.

mod category_service;
mod container;
mod crud;
mod exam_service;
mod question_service;
mod user_service;

pub use category_service::{CategoryManager, CategoryService};
pub use container::{ServiceContainer, Services};
pub use crud::{CrudFacade, CrudService};
pub use exam_service::{ExamManager, ExamService};
pub use question_service::{QuestionManager, QuestionService};
pub use user_service::{UserManager, UserService};
