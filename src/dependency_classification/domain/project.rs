use super::children::{Children, Container};
use super::framework::Framework;
use super::identifier::{compare_ignore_case, hash_ignore_case, NodeOrdering};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// One project and its frameworks. Identified by name, case-insensitively.
#[derive(Debug)]
pub struct Project {
    name: String,
    frameworks: Children<Framework>,
}

impl Project {
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        Self {
            name: name.into(),
            frameworks: Children::with_capacity(capacity),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Container for Project {
    type Child = Framework;

    fn children(&self) -> &Children<Framework> {
        &self.frameworks
    }

    fn children_mut(&mut self) -> &mut Children<Framework> {
        &mut self.frameworks
    }

    /// Frameworks without dependencies are dropped.
    fn accepts(child: &Framework) -> bool {
        child.has_children()
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Project {}

impl PartialOrd for Project {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Project {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_ignore_case(&self.name, &other.name)
    }
}

impl Hash for Project {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(&self.name, state);
    }
}

impl NodeOrdering for Project {
    const TYPE_NAME: &'static str = "Project";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_classification::domain::{
        Dependency, FrameworkId, PackageName, PackageVersion,
    };
    use std::rc::Rc;

    fn framework_with(id: &str, dependencies: &[&str]) -> Framework {
        let mut framework = Framework::new(FrameworkId::parse(id), dependencies.len());
        for name in dependencies {
            framework.add(Rc::new(Dependency::new(
                PackageName::new(name.to_string()).unwrap(),
                PackageVersion::new("1.0.0".to_string()).unwrap(),
            )));
        }
        framework
    }

    #[test]
    fn test_rejects_framework_without_dependencies() {
        let mut project = Project::new("App", 1);
        assert!(!project.add(framework_with("net8.0", &[])));
        assert!(!project.has_children());
    }

    #[test]
    fn test_accepts_framework_with_dependencies() {
        let mut project = Project::new("App", 1);
        assert!(project.add(framework_with("net8.0", &["Serilog"])));
        assert!(project.has_children());
    }

    #[test]
    fn test_frameworks_sorted_by_id() {
        let mut project = Project::new("App", 2);
        project.add(framework_with(".NETStandard,Version=v2.0", &["A"]));
        project.add(framework_with(".NETCoreApp,Version=v3.1", &["A"]));

        let ids: Vec<String> = project
            .sorted_children()
            .iter()
            .map(|f| f.id().to_string())
            .collect();
        assert_eq!(
            ids,
            vec![".NETCoreApp,Version=v3.1", ".NETStandard,Version=v2.0"]
        );
    }

    #[test]
    fn test_identity_is_case_insensitive_name() {
        let mut a = Project::new("My.App", 1);
        let b = Project::new("my.app", 1);
        a.add(framework_with("net8.0", &["A"]));

        assert_eq!(a, b);
        assert!(Project::new("Alpha", 0) < Project::new("beta", 0));
    }
}
