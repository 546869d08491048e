//! Component - a reusable fragment with zero or more top-level nodes
//!
//! A component has no single native node of its own. While it is detached,
//! whatever it builds collects in its pending queue. Once a parent drains it,
//! the component remembers that parent and later appends land there
//! directly, as siblings following the component's own nodes.
//!
//! A component drained into another, still detached component forwards to
//! it: later appends follow the outer component's queue until that one is
//! attached, then its parent.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use tokamak_dom::NodeId;

use crate::node::check_same_dom;
use crate::{Dom, DomNodeQueue, Node, Result};

/// Renders a component's content
pub trait ComponentTemplate {
    fn render(&self, component: &mut Component, data: &Value) -> Result<()>;
}

impl<F> ComponentTemplate for F
where
    F: Fn(&mut Component, &Value) -> Result<()>,
{
    fn render(&self, component: &mut Component, data: &Value) -> Result<()> {
        self(component, data)
    }
}

#[derive(Debug)]
enum State {
    /// Not yet appended anywhere; built nodes wait here
    Detached(DomNodeQueue),
    /// Drained into this native parent
    Attached(NodeId),
    /// Drained into another detached component; appends follow it
    Forwarded(Rc<RefCell<State>>),
}

/// Where appends to a component end up after following forwards
enum Target {
    Queue(Rc<RefCell<State>>),
    Node(NodeId),
}

fn resolve(state: &Rc<RefCell<State>>) -> Target {
    let mut current = Rc::clone(state);
    loop {
        let next = match &*current.borrow() {
            State::Detached(_) => return Target::Queue(Rc::clone(&current)),
            State::Attached(parent) => return Target::Node(*parent),
            State::Forwarded(next) => Rc::clone(next),
        };
        current = next;
    }
}

/// Queue of a detached component that a drained child component forwards
/// its later appends to. Handed out by [`Component`]'s `append`.
#[derive(Clone)]
pub struct PendingParent(Rc<RefCell<State>>);

impl std::fmt::Debug for PendingParent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingParent").finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct Component {
    dom: Dom,
    name: String,
    data: Value,
    state: Rc<RefCell<State>>,
}

impl Component {
    /// Create a component and render it with `data`. Rendering completes
    /// before this returns; a render error discards the component.
    pub fn new<T>(dom: Dom, name: &str, template: &T, data: Value) -> Result<Self>
    where
        T: ComponentTemplate + ?Sized,
    {
        let mut component = Self {
            dom,
            name: name.to_string(),
            data: Value::Null,
            state: Rc::new(RefCell::new(State::Detached(DomNodeQueue::new()))),
        };
        template.render(&mut component, &data)?;
        component.data = data;
        Ok(component)
    }

    /// Name the component was created under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Data the component was rendered with
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Native parent later appends go to, if known yet. Follows forwards
    /// through enclosing components.
    pub fn deferred_parent(&self) -> Option<NodeId> {
        match resolve(&self.state) {
            Target::Node(parent) => Some(parent),
            Target::Queue(_) => None,
        }
    }

    fn is_detached(&self) -> bool {
        matches!(*self.state.borrow(), State::Detached(_))
    }
}

impl Node for Component {
    fn dom(&self) -> &Dom {
        &self.dom
    }

    fn append<C: Node>(&mut self, mut child: C) -> Result<C> {
        check_same_dom(&self.dom, child.dom())?;
        let nodes = child.take_dom_nodes();
        match resolve(&self.state) {
            Target::Queue(queue) => {
                if let State::Detached(pending) = &mut *queue.borrow_mut() {
                    pending.extend(nodes);
                }
                child.set_pending_parent(&PendingParent(queue));
            }
            Target::Node(parent) => {
                self.dom.attach(parent, nodes)?;
                child.set_deferred_parent(parent);
            }
        }
        Ok(child)
    }

    fn has_dom_nodes(&self) -> bool {
        match &*self.state.borrow() {
            State::Detached(pending) => !pending.is_empty(),
            State::Attached(_) | State::Forwarded(_) => false,
        }
    }

    fn get_dom_node(&mut self) -> Option<NodeId> {
        match &mut *self.state.borrow_mut() {
            State::Detached(pending) => pending.pop(),
            State::Attached(_) | State::Forwarded(_) => None,
        }
    }

    fn take_dom_nodes(&mut self) -> DomNodeQueue {
        match &mut *self.state.borrow_mut() {
            State::Detached(pending) => pending.take(),
            State::Attached(_) | State::Forwarded(_) => DomNodeQueue::new(),
        }
    }

    // Only the first drain decides where a component lives; re-appending
    // one that is already placed moves nothing and keeps its target.
    fn set_deferred_parent(&mut self, parent: NodeId) {
        if !self.is_detached() {
            tracing::trace!("Component {} already placed, keeping its parent", self.name);
            return;
        }
        debug_assert!(!self.has_dom_nodes(), "component attached with undrained nodes");
        tracing::trace!("Component {} attached to {:?}", self.name, parent);
        *self.state.borrow_mut() = State::Attached(parent);
    }

    fn set_pending_parent(&mut self, parent: &PendingParent) {
        // Draining a component into itself leaves it where it was
        if !self.is_detached() || Rc::ptr_eq(&parent.0, &self.state) {
            return;
        }
        debug_assert!(!self.has_dom_nodes(), "component forwarded with undrained nodes");
        tracing::trace!("Component {} forwards to an enclosing component", self.name);
        *self.state.borrow_mut() = State::Forwarded(Rc::clone(&parent.0));
    }
}
