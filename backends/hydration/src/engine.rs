//! The closure-driven hydration engine.

use core::fmt::Debug;

use splay_core::{Descriptor, Key, Props};

use crate::error::unknown_component;
use crate::{Classification, Components, HydrateError};

/// Renders a mapped component from its props, hydrated children and key.
pub type RenderFn<E> = Box<dyn Fn(&Props, Vec<E>, Option<&Key>) -> E>;

type NullFn<E> = Box<dyn Fn() -> E>;
type FragmentFn<E> = Box<dyn Fn(Vec<E>) -> E>;
type FallbackFn<E> = Box<dyn Fn(&Descriptor) -> E>;

/// Output of hydrating one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hydrated<E> {
    /// The node renders nothing.
    Empty,
    /// A single element.
    Element(E),
    /// Elements of a fragment with no wrapper of their own.
    Fragment(Vec<E>),
}

impl<E> Hydrated<E> {
    /// The element, if this is exactly one element.
    pub fn into_element(self) -> Option<E> {
        match self {
            Self::Element(element) => Some(element),
            Self::Empty | Self::Fragment(_) => None,
        }
    }

    /// All elements in order; empty for [`Hydrated::Empty`].
    pub fn into_vec(self) -> Vec<E> {
        match self {
            Self::Empty => Vec::new(),
            Self::Element(element) => vec![element],
            Self::Fragment(elements) => elements,
        }
    }

    /// Whether nothing was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Element(_) => false,
            Self::Fragment(elements) => elements.is_empty(),
        }
    }

    fn append_to(self, out: &mut Vec<E>) {
        match self {
            Self::Empty => {}
            Self::Element(element) => out.push(element),
            Self::Fragment(elements) => out.extend(elements),
        }
    }
}

/// Hydrates descriptors with plain render closures.
///
/// Children reach their parent's render function already hydrated and flattened: null
/// children are left out (unless `on_null` produces an element) and fragment children are
/// spliced in place (unless `on_fragment` wraps them).
pub struct Hydrator<E> {
    components: Components<RenderFn<E>>,
    fallback: Option<FallbackFn<E>>,
    on_null: Option<NullFn<E>>,
    on_fragment: Option<FragmentFn<E>>,
}

impl<E> Debug for Hydrator<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hydrator")
            .field("components", &self.components)
            .field("fallback", &self.fallback.is_some())
            .field("on_null", &self.on_null.is_some())
            .field("on_fragment", &self.on_fragment.is_some())
            .finish()
    }
}

impl<E> Hydrator<E> {
    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> HydratorBuilder<E> {
        HydratorBuilder {
            hydrator: Self {
                components: Components::new(),
                fallback: None,
                on_null: None,
                on_fragment: None,
            },
        }
    }

    /// Whether `ty` hydrates without the fallback.
    #[must_use]
    pub fn knows(&self, ty: &str) -> bool {
        self.components.knows(ty)
    }

    /// Hydrates `descriptor` and its whole subtree.
    ///
    /// # Errors
    ///
    /// Returns [`HydrateError::UnknownComponent`] for the first unmapped type met in
    /// pre-order when no fallback is configured.
    pub fn hydrate(&self, descriptor: &Descriptor) -> Result<Hydrated<E>, HydrateError> {
        let mut path = Vec::new();
        self.hydrate_node(descriptor, &mut path)
    }

    fn hydrate_node(
        &self,
        node: &Descriptor,
        path: &mut Vec<usize>,
    ) -> Result<Hydrated<E>, HydrateError> {
        match self.components.classify(node.ty()) {
            Classification::Null => Ok(self
                .on_null
                .as_ref()
                .map_or(Hydrated::Empty, |on_null| Hydrated::Element(on_null()))),
            Classification::Fragment => {
                let children = self.hydrate_children(node, path)?;
                Ok(match &self.on_fragment {
                    Some(on_fragment) => Hydrated::Element(on_fragment(children)),
                    None => Hydrated::Fragment(children),
                })
            }
            Classification::Known(render) => {
                let children = self.hydrate_children(node, path)?;
                Ok(Hydrated::Element(render(node.props(), children, node.key())))
            }
            Classification::Unknown => match &self.fallback {
                Some(fallback) => Ok(Hydrated::Element(fallback(node))),
                None => Err(unknown_component(node.ty(), path)),
            },
        }
    }

    fn hydrate_children(
        &self,
        node: &Descriptor,
        path: &mut Vec<usize>,
    ) -> Result<Vec<E>, HydrateError> {
        let mut out = Vec::with_capacity(node.children().len());
        for (index, child) in node.children().iter().enumerate() {
            path.push(index);
            let hydrated = self.hydrate_node(child, path);
            path.pop();
            hydrated?.append_to(&mut out);
        }
        Ok(out)
    }
}

/// Builder for [`Hydrator`].
pub struct HydratorBuilder<E> {
    hydrator: Hydrator<E>,
}

impl<E> Debug for HydratorBuilder<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("HydratorBuilder").field(&self.hydrator).finish()
    }
}

impl<E> HydratorBuilder<E> {
    /// Maps `ty` to a render function.
    #[must_use]
    pub fn component(
        mut self,
        ty: impl Into<String>,
        render: impl Fn(&Props, Vec<E>, Option<&Key>) -> E + 'static,
    ) -> Self {
        self.hydrator.components.insert(ty, Box::new(render));
        self
    }

    /// Renders unmapped types from the original descriptor instead of failing.
    #[must_use]
    pub fn fallback(mut self, fallback: impl Fn(&Descriptor) -> E + 'static) -> Self {
        self.hydrator.fallback = Some(Box::new(fallback));
        self
    }

    /// Produces an element for `__null__` nodes instead of nothing.
    #[must_use]
    pub fn on_null(mut self, on_null: impl Fn() -> E + 'static) -> Self {
        self.hydrator.on_null = Some(Box::new(on_null));
        self
    }

    /// Wraps the hydrated children of `__fragment__` nodes into one element.
    #[must_use]
    pub fn on_fragment(mut self, on_fragment: impl Fn(Vec<E>) -> E + 'static) -> Self {
        self.hydrator.on_fragment = Some(Box::new(on_fragment));
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> Hydrator<E> {
        self.hydrator
    }
}
