use super::children::{Children, Container};
use super::project::Project;

/// Root of the output model.
#[derive(Debug)]
pub struct Projects {
    projects: Children<Project>,
}

impl Projects {
    pub fn new(capacity: usize) -> Self {
        Self {
            projects: Children::with_capacity(capacity),
        }
    }
}

impl Default for Projects {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Container for Projects {
    type Child = Project;

    fn children(&self) -> &Children<Project> {
        &self.projects
    }

    fn children_mut(&mut self) -> &mut Children<Project> {
        &mut self.projects
    }

    /// A project is kept only if one of its frameworks has dependencies.
    fn accepts(child: &Project) -> bool {
        child.children().any(|framework| framework.has_children())
    }
}
