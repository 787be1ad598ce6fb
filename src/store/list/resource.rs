//! Server collections a [`ListStore`](super::ListStore) can hold.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{NewStudent, Student, Teacher};
use crate::validation::FormErrors;

/// A paginated collection served at a fixed path.
pub trait Resource: Send + Sync + 'static {
    type Item: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static;

    /// Plural name used in logs.
    const NAME: &'static str;
    /// GET path taking `offset` and `limit`.
    const LIST_PATH: &'static str;
    const FETCH_FALLBACK: &'static str;

    fn id(item: &Self::Item) -> &str;
}

/// A collection the client may add to and delete from.
pub trait MutableResource: Resource {
    /// Creatable fields only.
    type Draft: Serialize + Send + Sync;

    const CREATE_PATH: &'static str;
    /// DELETE path; the id is appended as one more path segment.
    const DELETE_PATH: &'static str;
    const CREATE_FALLBACK: &'static str;
    const DELETE_FALLBACK: &'static str;

    fn validate(draft: &Self::Draft) -> Result<(), FormErrors>;
}

/// Students of the logged-in teacher.
#[derive(Debug)]
pub struct Students;

/// Every teacher, with their student counts. Read-only.
#[derive(Debug)]
pub struct Teachers;

impl Resource for Students {
    type Item = Student;

    const NAME: &'static str = "students";
    const LIST_PATH: &'static str = "api/student/get-students-by-teacher";
    const FETCH_FALLBACK: &'static str = "Failed to fetch students";

    fn id(item: &Student) -> &str {
        &item.id
    }
}

impl MutableResource for Students {
    type Draft = NewStudent;

    const CREATE_PATH: &'static str = "api/student/create-student";
    const DELETE_PATH: &'static str = "api/student/delete-student";
    const CREATE_FALLBACK: &'static str = "Failed to create student";
    const DELETE_FALLBACK: &'static str = "Failed to delete student";

    fn validate(draft: &NewStudent) -> Result<(), FormErrors> {
        draft.validate()
    }
}

impl Resource for Teachers {
    type Item = Teacher;

    const NAME: &'static str = "teachers";
    const LIST_PATH: &'static str = "api/teacher/get-all-teachers";
    const FETCH_FALLBACK: &'static str = "Failed to fetch teachers";

    fn id(item: &Teacher) -> &str {
        &item.id
    }
}
