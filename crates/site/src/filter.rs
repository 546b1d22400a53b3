//! Client-side project filtering.

use std::fmt;

use folio_core::project::ProjectType;
use folio_db::models::project::Project;

/// The filter bar selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Type(ProjectType),
}

impl ProjectFilter {
    /// Every selectable filter, in display order.
    pub fn options() -> impl Iterator<Item = ProjectFilter> {
        std::iter::once(ProjectFilter::All).chain(ProjectType::ALL.into_iter().map(ProjectFilter::Type))
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Type(t) => project.project_type == t,
        }
    }

    /// Projects that pass the filter, in their original order.
    pub fn apply(self, projects: &[Project]) -> Vec<&Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }

    /// Text shown when nothing passes the filter.
    pub fn empty_message(self) -> String {
        match self {
            ProjectFilter::All => "No projects found.".to_string(),
            ProjectFilter::Type(t) => format!("No {t} projects found."),
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectFilter::All => f.write_str("all"),
            ProjectFilter::Type(t) => write!(f, "{t}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::project;

    use super::*;

    #[test]
    fn filter_keeps_order_and_type() {
        let projects = vec![
            project(1, "A", ProjectType::Interior),
            project(2, "B", ProjectType::Architectural),
            project(3, "C", ProjectType::Interior),
        ];

        let interior = ProjectFilter::Type(ProjectType::Interior).apply(&projects);
        let ids: Vec<_> = interior.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(ProjectFilter::All.apply(&projects).len(), 3);
    }

    #[test]
    fn empty_messages() {
        assert_eq!(ProjectFilter::All.empty_message(), "No projects found.");
        assert_eq!(
            ProjectFilter::Type(ProjectType::Production).empty_message(),
            "No production projects found."
        );
    }

    #[test]
    fn options_start_with_all() {
        let options: Vec<_> = ProjectFilter::options().collect();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], ProjectFilter::All);
    }
}
