use crate::format::FormatDescriptor;
use metrics::{IntoLabels, Label, SharedString};

pub const KIND: &str = "kind";
pub const SCOPE: &str = "scope";
pub const OUTCOME: &str = "outcome";

/// Holder of multiple [Label] providing some methods to easily clone and adds new labels in it.
#[derive(Clone, Debug, Default)]
pub struct Labels(Vec<Label>);

impl Labels {
    /// Clone the actual [Labels] with additional key-value labels
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Labels {
        let mut tags = self.0.clone();
        tags.extend(additional_labels.iter().map(Label::from));
        Labels(tags)
    }

    /// `kind` and `scope` of a format.
    pub fn for_format(descriptor: &FormatDescriptor) -> Self {
        let kind: &'static str = descriptor.kind.into();
        Labels(vec![
            Label::new(KIND, kind),
            Label::new(SCOPE, descriptor.scope.to_string()),
        ])
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
