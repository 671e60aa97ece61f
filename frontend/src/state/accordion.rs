use std::rc::Rc;

use yew::Reducible;

/// Single-expansion holder for a list of collapsible items.
///
/// At most one id is expanded at a time. Separate holders never interact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accordion<Id> {
    expanded: Option<Id>,
}

impl<Id> Default for Accordion<Id> {
    fn default() -> Self {
        Self { expanded: None }
    }
}

impl<Id: PartialEq> Accordion<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapses `id` if it is the open item, otherwise opens it in place of
    /// whatever was open.
    pub fn toggle(&mut self, id: Id) {
        if self.expanded.as_ref() == Some(&id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id);
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded = None;
    }

    pub fn is_expanded(&self, id: &Id) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    pub fn expanded(&self) -> Option<&Id> {
        self.expanded.as_ref()
    }
}

pub enum AccordionAction<Id> {
    Toggle(Id),
    CollapseAll,
}

impl<Id: Clone + PartialEq> Reducible for Accordion<Id> {
    type Action = AccordionAction<Id>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AccordionAction::Toggle(id) => next.toggle(id),
            AccordionAction::CollapseAll => next.collapse_all(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let accordion = Accordion::<usize>::new();
        assert_eq!(accordion.expanded(), None);
        assert!(!accordion.is_expanded(&0));
    }

    #[test]
    fn toggling_twice_restores_collapsed() {
        let mut accordion = Accordion::new();
        accordion.toggle("role-1");
        assert!(accordion.is_expanded(&"role-1"));
        accordion.toggle("role-1");
        assert_eq!(accordion, Accordion::new());
    }

    #[test]
    fn opening_another_item_closes_the_first() {
        let mut accordion = Accordion::new();
        accordion.toggle(3);
        accordion.toggle(8);
        assert!(!accordion.is_expanded(&3));
        assert!(accordion.is_expanded(&8));
        assert_eq!(accordion.expanded(), Some(&8));
    }

    #[test]
    fn faq_walkthrough() {
        let mut faq = Accordion::new();
        let items = [1, 2, 3];
        let open = |faq: &Accordion<i32>| items.iter().filter(|i| faq.is_expanded(i)).copied().collect::<Vec<_>>();

        assert!(open(&faq).is_empty());
        faq.toggle(2);
        assert_eq!(open(&faq), vec![2]);
        faq.toggle(2);
        assert!(open(&faq).is_empty());
        faq.toggle(1);
        faq.toggle(3);
        assert_eq!(open(&faq), vec![3]);
    }

    #[test]
    fn holders_are_independent() {
        let mut faq = Accordion::new();
        let mut jobs = Accordion::new();
        faq.toggle(1);
        jobs.toggle(1);
        faq.toggle(1);
        assert!(!faq.is_expanded(&1));
        assert!(jobs.is_expanded(&1));
    }

    #[test]
    fn reducer_applies_actions() {
        let state = Rc::new(Accordion::<u8>::new());
        let state = state.reduce(AccordionAction::Toggle(4));
        assert!(state.is_expanded(&4));
        let state = state.reduce(AccordionAction::Toggle(5));
        assert_eq!(state.expanded(), Some(&5));
        let state = state.reduce(AccordionAction::CollapseAll);
        assert_eq!(state.expanded(), None);
    }
}
