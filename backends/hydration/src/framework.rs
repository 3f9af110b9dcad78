//! Hydration against a rendering framework's element primitive.

use core::fmt::Debug;

use splay_core::{Descriptor, Key, Props, to_value};

use crate::error::unknown_component;
use crate::{Classification, Components, HydrateError};

/// Prop through which a fallback component receives the unmapped descriptor.
pub const DESCRIPTOR_PROP: &str = "descriptor";

/// A rendering framework seen through its `create_element`-style primitive.
pub trait Framework {
    /// What the component map points to.
    type Component;
    /// What hydration produces.
    type Element;

    /// Instantiates `component`.
    fn create_element(
        &self,
        component: &Self::Component,
        props: &Props,
        key: Option<&Key>,
        children: Vec<Self::Element>,
    ) -> Self::Element;

    /// Groups `children` without a wrapper of their own.
    fn fragment(&self, key: Option<&Key>, children: Vec<Self::Element>) -> Self::Element;

    /// The element that renders nothing.
    fn empty(&self) -> Self::Element;
}

/// Hydrates descriptors into a [`Framework`]'s elements.
pub struct FrameworkHydrator<F: Framework> {
    framework: F,
    components: Components<F::Component>,
    fallback: Option<F::Component>,
}

impl<F: Framework + Debug> Debug for FrameworkHydrator<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameworkHydrator")
            .field("framework", &self.framework)
            .field("components", &self.components)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl<F: Framework> FrameworkHydrator<F> {
    /// Starts a builder around `framework`.
    pub fn builder(framework: F) -> FrameworkHydratorBuilder<F> {
        FrameworkHydratorBuilder {
            hydrator: Self {
                framework,
                components: Components::new(),
                fallback: None,
            },
        }
    }

    /// The wrapped framework.
    pub const fn framework(&self) -> &F {
        &self.framework
    }

    /// Whether `ty` hydrates without the fallback.
    #[must_use]
    pub fn knows(&self, ty: &str) -> bool {
        self.components.knows(ty)
    }

    /// Hydrates `descriptor` into a single element.
    ///
    /// Sentinels map onto [`Framework::empty`] and [`Framework::fragment`]. Children are
    /// hydrated before their parent's `create_element` call.
    ///
    /// # Errors
    ///
    /// Returns [`HydrateError::UnknownComponent`] for the first unmapped type met in
    /// pre-order when no fallback component is configured.
    pub fn hydrate(&self, descriptor: &Descriptor) -> Result<F::Element, HydrateError> {
        let mut path = Vec::new();
        self.hydrate_node(descriptor, &mut path)
    }

    fn hydrate_node(
        &self,
        node: &Descriptor,
        path: &mut Vec<usize>,
    ) -> Result<F::Element, HydrateError> {
        match self.components.classify(node.ty()) {
            Classification::Null => Ok(self.framework.empty()),
            Classification::Fragment => {
                let children = self.hydrate_children(node, path)?;
                Ok(self.framework.fragment(node.key(), children))
            }
            Classification::Known(component) => {
                let children = self.hydrate_children(node, path)?;
                Ok(self
                    .framework
                    .create_element(component, node.props(), node.key(), children))
            }
            Classification::Unknown => {
                let Some(fallback) = &self.fallback else {
                    return Err(unknown_component(node.ty(), path));
                };
                let mut props = Props::new();
                props.insert(DESCRIPTOR_PROP.to_owned(), to_value(node));
                Ok(self
                    .framework
                    .create_element(fallback, &props, node.key(), Vec::new()))
            }
        }
    }

    fn hydrate_children(
        &self,
        node: &Descriptor,
        path: &mut Vec<usize>,
    ) -> Result<Vec<F::Element>, HydrateError> {
        node.children()
            .iter()
            .enumerate()
            .map(|(index, child)| {
                path.push(index);
                let element = self.hydrate_node(child, path);
                path.pop();
                element
            })
            .collect()
    }
}

/// Builder for [`FrameworkHydrator`].
pub struct FrameworkHydratorBuilder<F: Framework> {
    hydrator: FrameworkHydrator<F>,
}

impl<F: Framework + Debug> Debug for FrameworkHydratorBuilder<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("FrameworkHydratorBuilder")
            .field(&self.hydrator)
            .finish()
    }
}

impl<F: Framework> FrameworkHydratorBuilder<F> {
    /// Maps `ty` to `component`.
    #[must_use]
    pub fn component(mut self, ty: impl Into<String>, component: F::Component) -> Self {
        self.hydrator.components.insert(ty, component);
        self
    }

    /// Renders unmapped types with `component`, passing the original descriptor in the
    /// [`DESCRIPTOR_PROP`] prop.
    #[must_use]
    pub fn fallback(mut self, component: F::Component) -> Self {
        self.hydrator.fallback = Some(component);
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> FrameworkHydrator<F> {
        self.hydrator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use splay_core::NodePath;

    /// Mirrors primitive calls as a plain tree.
    #[derive(Debug)]
    struct Recorder;

    #[derive(Debug, PartialEq)]
    enum Node {
        Empty,
        Fragment(Option<String>, Vec<Node>),
        Element(&'static str, Props, Option<String>, Vec<Node>),
    }

    impl Framework for Recorder {
        type Component = &'static str;
        type Element = Node;

        fn create_element(
            &self,
            component: &&'static str,
            props: &Props,
            key: Option<&Key>,
            children: Vec<Node>,
        ) -> Node {
            Node::Element(*component, props.clone(), key.map(ToString::to_string), children)
        }

        fn fragment(&self, key: Option<&Key>, children: Vec<Node>) -> Node {
            Node::Fragment(key.map(ToString::to_string), children)
        }

        fn empty(&self) -> Node {
            Node::Empty
        }
    }

    fn hydrator() -> FrameworkHydratorBuilder<Recorder> {
        FrameworkHydrator::builder(Recorder)
            .component("card", "Card")
            .component("label", "Label")
    }

    #[test]
    fn sentinels_use_framework_primitives() {
        let hydrator = hydrator().build();
        let tree =
            Descriptor::fragment([Descriptor::null(), Descriptor::new("label")]).with_key("k");
        assert_eq!(
            hydrator.hydrate(&tree).unwrap(),
            Node::Fragment(
                Some("k".to_owned()),
                vec![
                    Node::Empty,
                    Node::Element("Label", Props::new(), None, Vec::new())
                ]
            )
        );
    }

    #[test]
    fn create_element_gets_props_key_and_children() {
        let hydrator = hydrator().build();
        let tree = Descriptor::new("card")
            .with_prop("title", "Ada")
            .with_key(3)
            .with_child(Descriptor::new("label"));
        let Node::Element(component, props, key, children) = hydrator.hydrate(&tree).unwrap()
        else {
            panic!("expected an element");
        };
        assert_eq!(component, "Card");
        assert_eq!(props["title"], json!("Ada"));
        assert_eq!(key.as_deref(), Some("3"));
        assert_eq!(children.len(), 1);
    }

    #[test]
    fn fallback_receives_serialized_descriptor() {
        let hydrator = hydrator().fallback("Unknown").build();
        let chart = Descriptor::new("chart").with_prop("points", json!([1, 2]));
        let Node::Element(component, props, _, children) = hydrator.hydrate(&chart).unwrap()
        else {
            panic!("expected an element");
        };
        assert_eq!(component, "Unknown");
        assert_eq!(props.len(), 1);
        assert_eq!(
            props[DESCRIPTOR_PROP],
            json!({"type": "chart", "props": {"points": [1, 2]}})
        );
        assert!(children.is_empty());
    }

    #[test]
    fn unknown_without_fallback_is_an_error() {
        let hydrator = hydrator().build();
        let tree = Descriptor::new("card").with_child(Descriptor::new("chart"));
        assert_eq!(
            hydrator.hydrate(&tree),
            Err(HydrateError::UnknownComponent {
                ty: "chart".to_owned(),
                path: NodePath::from(vec![0]),
            })
        );
    }
}
