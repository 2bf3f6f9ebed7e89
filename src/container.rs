//! Arrow container: the registry shared by every element that draws arrows
//!
//! Elements register with a container, report their measured rectangles and
//! declare relations. The container recomputes all arrows from that snapshot
//! and hands them to subscribers. Geometry stays pure; only the container
//! decides when to run it.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use log::debug;
use serde::Deserialize;

use crate::error::ArcherError;
use crate::layout::{route_arrow, ArrowConfig, ArrowLayout, BoundingBox};
use crate::relation::{source_to_target, Relation, RelationDecl};

/// Callback invoked with the recomputed arrows after every change
pub type ArrowListener = Box<dyn FnMut(&[ArrowLayout])>;

/// Registry of element rectangles and relations for one coordinate space
pub struct ArrowContainer {
    config: ArrowConfig,
    elements: BTreeSet<String>,
    bounds: HashMap<String, BoundingBox>,
    relations: BTreeMap<String, Vec<Relation>>,
    listeners: Vec<ArrowListener>,
}

impl ArrowContainer {
    pub fn new(config: ArrowConfig) -> Self {
        Self {
            config,
            elements: BTreeSet::new(),
            bounds: HashMap::new(),
            relations: BTreeMap::new(),
            listeners: vec![],
        }
    }

    pub fn config(&self) -> &ArrowConfig {
        &self.config
    }

    /// Register an element id; ids must be unique within a container
    pub fn register_element(&mut self, id: impl Into<String>) -> Result<(), ArcherError> {
        let id = id.into();
        if !self.elements.insert(id.clone()) {
            return Err(ArcherError::duplicate(id));
        }
        Ok(())
    }

    /// Record a new measurement for an element
    pub fn measure(&mut self, id: impl Into<String>, bounds: BoundingBox) {
        self.bounds.insert(id.into(), bounds);
        self.notify();
    }

    /// Replace the relations declared by `source_id`
    pub fn set_relations(&mut self, source_id: &str, relations: Vec<RelationDecl>) {
        let relations = source_to_target(source_id, relations);
        if relations.is_empty() {
            self.relations.remove(source_id);
        } else {
            self.relations.insert(source_id.to_string(), relations);
        }
        self.notify();
    }

    /// Drop an element, its measurement and the relations it declared
    pub fn forget(&mut self, id: &str) {
        self.elements.remove(id);
        self.bounds.remove(id);
        self.relations.remove(id);
        self.notify();
    }

    pub fn bounds_of(&self, id: &str) -> Option<&BoundingBox> {
        self.bounds.get(id)
    }

    /// Measured elements in id order
    pub fn measured_elements(&self) -> Vec<(&str, BoundingBox)> {
        let mut measured: Vec<_> = self
            .bounds
            .iter()
            .map(|(id, bounds)| (id.as_str(), *bounds))
            .collect();
        measured.sort_by(|a, b| a.0.cmp(b.0));
        measured
    }

    /// Subscribe to arrow recomputations
    pub fn subscribe(&mut self, listener: impl FnMut(&[ArrowLayout]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Recompute and push the current arrows to every subscriber
    pub fn refresh(&mut self) {
        self.notify();
    }

    /// Compute every arrow whose endpoints are both measured
    ///
    /// Relations pointing at an element that has not been measured yet are
    /// skipped; they appear once the measurement arrives. The result is
    /// sorted by `order`, ties keeping source id then declaration order.
    pub fn arrows(&self) -> Vec<ArrowLayout> {
        let mut arrows = vec![];
        for (source_id, relations) in &self.relations {
            let Some(source_bounds) = self.bounds.get(source_id) else {
                debug!(source = source_id.as_str(); "Skipping relations of unmeasured source");
                continue;
            };
            for relation in relations {
                let target_id = relation.target.element_id.as_str();
                let Some(target_bounds) = self.bounds.get(target_id) else {
                    debug!(
                        source = source_id.as_str(),
                        target = target_id;
                        "Skipping relation to unmeasured target"
                    );
                    continue;
                };
                arrows.push(route_arrow(source_bounds, target_bounds, relation, &self.config));
            }
        }
        arrows.sort_by_key(|arrow| arrow.order);
        arrows
    }

    /// Smallest box containing every measured element and the endpoints of
    /// `arrows`, usually the result of [`ArrowContainer::arrows`]
    pub fn content_bounds(&self, arrows: &[ArrowLayout]) -> Option<BoundingBox> {
        let mut rects = self.bounds.values();
        let first = *rects.next()?;
        let mut total = rects.fold(first, |acc, b| acc.union(b));
        for arrow in arrows {
            total = total
                .expand_to_include(arrow.geometry.start)
                .expand_to_include(arrow.geometry.end);
        }
        Some(total)
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let arrows = self.arrows();
        for listener in &mut self.listeners {
            listener(&arrows);
        }
    }
}

impl Default for ArrowContainer {
    fn default() -> Self {
        Self::new(ArrowConfig::default())
    }
}

impl fmt::Debug for ArrowContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrowContainer")
            .field("config", &self.config)
            .field("elements", &self.elements)
            .field("bounds", &self.bounds)
            .field("relations", &self.relations)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// An element that takes part in arrows: its id, optional measurement and
/// the relations it starts
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElementDecl {
    pub id: String,
    #[serde(default)]
    pub bounds: Option<BoundingBox>,
    #[serde(default)]
    pub relations: Vec<RelationDecl>,
}

impl ElementDecl {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bounds: None,
            relations: vec![],
        }
    }

    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_relation(mut self, relation: RelationDecl) -> Self {
        self.relations.push(relation);
        self
    }

    /// Register this element with its enclosing container
    ///
    /// Fails with [`ArcherError::MissingContainer`] when there is none.
    pub fn attach(self, container: Option<&mut ArrowContainer>) -> Result<(), ArcherError> {
        let container = container.ok_or_else(|| ArcherError::missing_container(&self.id))?;
        container.register_element(self.id.as_str())?;
        if let Some(bounds) = self.bounds {
            container.measure(self.id.as_str(), bounds);
        }
        if !self.relations.is_empty() {
            container.set_relations(&self.id, self.relations);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::layout::{AnchorSide, Vector2};
    use pretty_assertions::assert_eq;

    fn down(target: &str) -> RelationDecl {
        RelationDecl::new(target, AnchorSide::Bottom, AnchorSide::Top)
    }

    #[test]
    fn test_attach_without_container_fails_fast() {
        let err = ElementDecl::new("lonely").attach(None).unwrap_err();
        assert_eq!(err, ArcherError::missing_container("lonely"));
    }

    #[test]
    fn test_duplicate_element_rejected() {
        let mut container = ArrowContainer::default();
        ElementDecl::new("a").attach(Some(&mut container)).unwrap();
        let err = ElementDecl::new("a").attach(Some(&mut container)).unwrap_err();
        assert_eq!(err, ArcherError::duplicate("a"));
    }

    #[test]
    fn test_unmeasured_target_is_skipped() {
        let mut container = ArrowContainer::default();
        ElementDecl::new("a")
            .with_bounds(BoundingBox::new(0.0, 0.0, 10.0, 10.0))
            .with_relation(down("b"))
            .attach(Some(&mut container))
            .unwrap();
        assert!(container.arrows().is_empty());

        container.measure("b", BoundingBox::new(0.0, 100.0, 10.0, 10.0));
        let arrows = container.arrows();
        assert_eq!(arrows.len(), 1);
        assert_eq!(arrows[0].target_id, "b");
    }

    #[test]
    fn test_unmeasured_source_is_skipped() {
        let mut container = ArrowContainer::default();
        container.measure("b", BoundingBox::new(0.0, 100.0, 10.0, 10.0));
        container.set_relations("a", vec![down("b")]);
        assert!(container.arrows().is_empty());
    }

    #[test]
    fn test_arrows_sorted_by_order() {
        let mut container = ArrowContainer::default();
        for (id, y) in [("a", 0.0), ("b", 100.0), ("c", 200.0)] {
            container.measure(id, BoundingBox::new(0.0, y, 10.0, 10.0));
        }
        container.set_relations("a", vec![down("b").with_order(2), down("c")]);
        container.set_relations("b", vec![down("c").with_order(1)]);

        let order: Vec<_> = container
            .arrows()
            .iter()
            .map(|a| (a.source_id.clone(), a.target_id.clone()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("a".to_string(), "c".to_string()),
                ("b".to_string(), "c".to_string()),
                ("a".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_forget_removes_relations_and_bounds() {
        let mut container = ArrowContainer::default();
        container.measure("a", BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        container.measure("b", BoundingBox::new(0.0, 100.0, 10.0, 10.0));
        container.set_relations("a", vec![down("b")]);
        assert_eq!(container.arrows().len(), 1);

        container.forget("a");
        assert!(container.arrows().is_empty());
        assert!(container.bounds_of("a").is_none());
        assert!(container.bounds_of("b").is_some());
    }

    #[test]
    fn test_subscribers_see_each_change() {
        let seen = Rc::new(RefCell::new(vec![]));
        let mut container = ArrowContainer::default();
        let sink = Rc::clone(&seen);
        container.subscribe(move |arrows| sink.borrow_mut().push(arrows.len()));

        container.measure("a", BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        container.set_relations("a", vec![down("b")]);
        container.measure("b", BoundingBox::new(0.0, 50.0, 10.0, 10.0));
        container.refresh();

        assert_eq!(*seen.borrow(), vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_measurement_change_moves_arrow() {
        let mut container = ArrowContainer::default();
        container.measure("a", BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        container.measure("b", BoundingBox::new(0.0, 100.0, 10.0, 10.0));
        container.set_relations("a", vec![down("b")]);
        let before = container.arrows()[0].d();

        container.measure("b", BoundingBox::new(40.0, 100.0, 10.0, 10.0));
        let after = container.arrows()[0].d();
        assert_ne!(before, after);
    }

    #[test]
    fn test_content_bounds() {
        let mut container = ArrowContainer::default();
        assert_eq!(container.content_bounds(&[]), None);
        container.measure("a", BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        container.measure("b", BoundingBox::new(50.0, 40.0, 10.0, 10.0));
        assert_eq!(
            container.content_bounds(&container.arrows()),
            Some(BoundingBox::new(0.0, 0.0, 60.0, 50.0))
        );
    }

    #[test]
    fn test_content_bounds_covers_given_arrows() {
        // A 30 unit gap pushes both endpoints outside the measured rectangles
        let mut container = ArrowContainer::new(ArrowConfig::new().with_offset(30.0));
        container.measure("a", BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        container.measure("b", BoundingBox::new(0.0, 100.0, 10.0, 10.0));
        container.set_relations(
            "a",
            vec![RelationDecl::new("b", AnchorSide::Top, AnchorSide::Bottom)],
        );

        let arrows = container.arrows();
        assert_eq!(arrows[0].geometry.start, Vector2::new(5.0, -30.0));
        assert_eq!(arrows[0].geometry.end, Vector2::new(5.0, 160.0));
        assert_eq!(
            container.content_bounds(&arrows),
            Some(BoundingBox::new(0.0, -30.0, 10.0, 190.0))
        );
        assert_eq!(
            container.content_bounds(&[]),
            Some(BoundingBox::new(0.0, 0.0, 10.0, 110.0))
        );
    }

    #[test]
    fn test_measured_elements_sorted() {
        let mut container = ArrowContainer::default();
        container.measure("z", BoundingBox::zero());
        container.measure("m", BoundingBox::zero());
        let ids: Vec<_> = container.measured_elements().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["m", "z"]);
    }
}
