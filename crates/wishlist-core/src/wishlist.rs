//! Public Wishlist
//!
//! View-model of the public page: wishes grouped by owner, the currently shown
//! owner, the reservation map and the description modal.

use std::cell::{Ref, RefCell};
use std::collections::BTreeMap;

use log::{error, info, warn};

use crate::{NameDialog, NamePrompt, Reservations, ReserverName, ViewHooks, Wish, WishlistApi};

/// Render state of one wish card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishCard {
    pub reserved: bool,
    pub button_label: &'static str,
    /// "Reserviert von … ✔" or empty
    pub status: String,
    /// Card advertises the description modal
    pub has_details: bool,
}

/// Content of the description modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishDetails {
    pub wish: Wish,
    pub reserved_line: Option<String>,
}

impl WishDetails {
    pub fn description_text(&self) -> &str {
        if self.wish.has_description() {
            &self.wish.description
        } else {
            "Keine Beschreibung vorhanden."
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PublicWishlist {
    by_owner: BTreeMap<String, Vec<Wish>>,
    reservations: Reservations,
    current_owner: Option<String>,
    description_for: Option<String>,
}

impl PublicWishlist {
    pub fn new(wishes: Vec<Wish>, reservations: Reservations) -> Self {
        Self {
            by_owner: group_by_owner(wishes),
            reservations,
            current_owner: None,
            description_for: None,
        }
    }

    pub fn owners(&self) -> impl Iterator<Item = &str> {
        self.by_owner.keys().map(String::as_str)
    }

    pub fn wishes_of(&self, owner: &str) -> &[Wish] {
        self.by_owner.get(owner).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn current_owner(&self) -> Option<&str> {
        self.current_owner.as_deref()
    }

    /// Portrait click: show this owner's grid, or hide it when already shown
    pub fn select_owner(&mut self, owner: &str) {
        if self.current_owner.as_deref() == Some(owner) {
            self.current_owner = None;
        } else {
            self.current_owner = Some(owner.to_string());
        }
    }

    /// Wishes in the grid; empty while the grid is hidden
    pub fn visible_wishes(&self) -> &[Wish] {
        match &self.current_owner {
            Some(owner) => self.wishes_of(owner),
            None => &[],
        }
    }

    /// The grid is hidden with no owner selected or when the owner has no wishes
    pub fn grid_hidden(&self) -> bool {
        self.visible_wishes().is_empty()
    }

    pub fn find(&self, wish_id: &str) -> Option<&Wish> {
        self.by_owner
            .values()
            .flat_map(|wishes| wishes.iter())
            .find(|wish| wish.id == wish_id)
    }

    pub fn reservations(&self) -> &Reservations {
        &self.reservations
    }

    pub fn card(&self, wish: &Wish) -> WishCard {
        let status = self.reservations.status_line(&wish.id);
        let reserved = status.is_some();
        WishCard {
            reserved,
            button_label: if reserved { "Unreserve" } else { "Reserve" },
            status: status.unwrap_or_default(),
            has_details: wish.has_description(),
        }
    }

    pub fn reserve(&mut self, wish_id: &str, name: &ReserverName) {
        self.reservations.reserve(wish_id, name);
    }

    pub fn release(&mut self, wish_id: &str) {
        self.reservations.release(wish_id);
    }

    /// Open the description modal for a known wish
    pub fn show_description(&mut self, wish_id: &str) -> bool {
        if self.find(wish_id).is_none() {
            return false;
        }
        self.description_for = Some(wish_id.to_string());
        true
    }

    pub fn close_description(&mut self) {
        self.description_for = None;
    }

    pub fn description(&self) -> Option<WishDetails> {
        let wish = self.find(self.description_for.as_deref()?)?;
        Some(WishDetails {
            wish: wish.clone(),
            reserved_line: self.reservations.status_line(&wish.id),
        })
    }
}

/// Group wishes by owner keeping their order; owner-less wishes are dropped
fn group_by_owner(wishes: Vec<Wish>) -> BTreeMap<String, Vec<Wish>> {
    let mut grouped: BTreeMap<String, Vec<Wish>> = BTreeMap::new();
    for wish in wishes {
        if wish.owner.is_empty() {
            continue;
        }
        grouped.entry(wish.owner.clone()).or_default().push(wish);
    }
    grouped
}

/// What a reserve-button click ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Reserved(ReserverName),
    Released,
    Cancelled,
}

/// Drives the public page: loading and the reservation toggle.
///
/// Local state is updated before the store is written and never rolled back
/// when persisting fails.
pub struct WishlistController<A, D, H> {
    api: A,
    dialog: D,
    hooks: H,
    state: RefCell<PublicWishlist>,
}

impl<A, D, H> WishlistController<A, D, H>
where
    A: WishlistApi,
    D: NameDialog,
    H: ViewHooks,
{
    pub fn new(api: A, dialog: D, hooks: H) -> Self {
        Self {
            api,
            dialog,
            hooks,
            state: RefCell::new(PublicWishlist::default()),
        }
    }

    pub fn state(&self) -> Ref<'_, PublicWishlist> {
        self.state.borrow()
    }

    /// Fetch wishes, then reservations. Nothing is loaded when there are no wishes.
    pub async fn load(&self) {
        let wishes = match self.api.wishes().await {
            Ok(wishes) => wishes,
            Err(err) => {
                error!("Failed to load wish data: {}", err);
                Vec::new()
            }
        };
        if wishes.is_empty() {
            return;
        }

        let reservations = match self.api.reservations().await {
            Ok(reservations) => reservations,
            Err(err) => {
                warn!("Could not read reservation state: {}", err);
                Reservations::default()
            }
        };

        info!("Loaded {} wishes, {} reservations", wishes.len(), reservations.len());
        *self.state.borrow_mut() = PublicWishlist::new(wishes, reservations);
        self.hooks.refresh();
    }

    pub fn select_owner(&self, owner: &str) {
        self.state.borrow_mut().select_owner(owner);
        self.hooks.refresh();
    }

    pub fn show_description(&self, wish_id: &str) {
        if self.state.borrow_mut().show_description(wish_id) {
            self.hooks.refresh();
        }
    }

    pub fn close_description(&self) {
        self.state.borrow_mut().close_description();
        self.hooks.refresh();
    }

    /// Reserve-button click.
    ///
    /// Unreserved wishes ask for a name first; cancelling changes nothing.
    /// Every change persists the full reservation map.
    pub async fn toggle_reservation(&self, wish_id: &str) -> ToggleOutcome {
        let reserved = self.state.borrow().reservations().is_reserved(wish_id);

        if reserved {
            let snapshot = {
                let mut state = self.state.borrow_mut();
                state.release(wish_id);
                state.reservations().clone()
            };
            self.hooks.refresh();
            self.persist(&snapshot).await;
            return ToggleOutcome::Released;
        }

        let name = match self.dialog.ask_name().await {
            NamePrompt::Confirmed(name) => name,
            NamePrompt::Cancelled => {
                info!("Reservation cancelled");
                return ToggleOutcome::Cancelled;
            }
        };

        let snapshot = {
            let mut state = self.state.borrow_mut();
            state.reserve(wish_id, &name);
            state.reservations().clone()
        };
        self.hooks.refresh();
        self.hooks.reserved();
        self.persist(&snapshot).await;
        ToggleOutcome::Reserved(name)
    }

    async fn persist(&self, reservations: &Reservations) {
        if let Err(err) = self.api.save_reservations(reservations).await {
            error!("Failed to save reservations: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::testing::{wish, CountingHooks, FakeApi, ModalNames, ScriptedNames};
    use crate::{ApiError, NameModal};

    fn sample() -> Vec<Wish> {
        vec![
            wish("a1", "lena", "Roller"),
            wish("b1", "holger", "Werkzeug"),
            wish("a2", "lena", "Puzzle"),
            wish("x", "", "Ohne Besitzer"),
        ]
    }

    fn controller(
        api: &Rc<FakeApi>,
        names: Vec<NamePrompt>,
    ) -> WishlistController<Rc<FakeApi>, Rc<ScriptedNames>, Rc<CountingHooks>> {
        let dialog = Rc::new(ScriptedNames(RefCell::new(names.into())));
        WishlistController::new(api.clone(), dialog, Rc::new(CountingHooks::default()))
    }

    #[test]
    fn test_grouping_keeps_order_and_skips_ownerless() {
        let list = PublicWishlist::new(sample(), Reservations::new());
        let titles: Vec<_> = list.wishes_of("lena").iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, ["Roller", "Puzzle"]);
        assert_eq!(list.owners().collect::<Vec<_>>(), ["holger", "lena"]);
        assert!(list.find("x").is_none());
    }

    #[test]
    fn test_selecting_owner_twice_hides_grid() {
        let mut list = PublicWishlist::new(sample(), Reservations::new());
        assert!(list.grid_hidden());

        list.select_owner("lena");
        assert!(list.visible_wishes().iter().all(|w| w.owner == "lena"));
        assert_eq!(list.visible_wishes().len(), 2);

        list.select_owner("holger");
        assert_eq!(list.visible_wishes()[0].id, "b1");

        list.select_owner("holger");
        assert!(list.grid_hidden());
        assert_eq!(list.current_owner(), None);
    }

    #[test]
    fn test_owner_without_wishes_keeps_grid_hidden() {
        let mut list = PublicWishlist::new(sample(), Reservations::new());
        list.select_owner("zoe");
        assert_eq!(list.current_owner(), Some("zoe"));
        assert!(list.grid_hidden());
    }

    #[test]
    fn test_card_state_follows_reservation() {
        let mut list = PublicWishlist::new(sample(), Reservations::new());
        let roller = list.find("a1").cloned().unwrap();
        assert_eq!(list.card(&roller).button_label, "Reserve");

        list.reserve("a1", &ReserverName::parse("Opa").unwrap());
        let card = list.card(&roller);
        assert!(card.reserved);
        assert_eq!(card.button_label, "Unreserve");
        assert_eq!(card.status, "Reserviert von Opa ✔");
    }

    #[test]
    fn test_reserving_leaves_visible_wishes_unchanged() {
        let mut list = PublicWishlist::new(sample(), Reservations::new());
        list.select_owner("lena");
        let before = list.visible_wishes().to_vec();
        let puzzle = list.find("a2").cloned().unwrap();

        list.reserve("a2", &ReserverName::parse("Oma").unwrap());
        assert_eq!(list.visible_wishes(), before.as_slice());
        assert!(list.card(&puzzle).reserved);

        list.release("a2");
        assert_eq!(list.visible_wishes(), before.as_slice());
        assert_eq!(list.card(&puzzle).status, "");
    }

    #[test]
    fn test_description_modal() {
        let mut wishes = sample();
        wishes[0].description = "Mit Klingel".to_string();
        let mut list = PublicWishlist::new(wishes, Reservations::new());

        assert!(!list.show_description("missing"));
        assert!(list.show_description("a1"));
        assert_eq!(list.description().unwrap().description_text(), "Mit Klingel");

        assert!(list.show_description("a2"));
        assert_eq!(
            list.description().unwrap().description_text(),
            "Keine Beschreibung vorhanden."
        );

        list.close_description();
        assert!(list.description().is_none());
    }

    #[tokio::test]
    async fn test_load_fetches_wishes_then_reservations() {
        let api = Rc::new(FakeApi::with_wishes(sample()));
        let ctl = controller(&api, vec![]);
        ctl.load().await;

        assert_eq!(*api.calls.borrow(), ["wishes", "reservations"]);
        assert_eq!(ctl.state().wishes_of("lena").len(), 2);
    }

    #[tokio::test]
    async fn test_load_skips_reservations_without_wishes() {
        let api = Rc::new(FakeApi::default());
        let ctl = controller(&api, vec![]);
        ctl.load().await;
        assert_eq!(*api.calls.borrow(), ["wishes"]);

        *api.fail_next.borrow_mut() = Some(ApiError::Network("offline".to_string()));
        ctl.load().await;
        assert_eq!(api.call_count(), 2);
    }

    #[tokio::test]
    async fn test_reserve_persists_full_map_and_chimes() {
        let api = Rc::new(FakeApi::with_wishes(sample()));
        api.reservations
            .borrow_mut()
            .reserve("b1", &ReserverName::parse("Lea").unwrap());
        let dialog = Rc::new(ScriptedNames(RefCell::new(
            vec![NamePrompt::Confirmed(ReserverName::parse("Tante Eva").unwrap())].into(),
        )));
        let hooks = Rc::new(CountingHooks::default());
        let ctl = WishlistController::new(api.clone(), dialog, hooks.clone());
        ctl.load().await;

        let outcome = ctl.toggle_reservation("a1").await;

        assert!(matches!(outcome, ToggleOutcome::Reserved(ref n) if n.as_str() == "Tante Eva"));
        assert_eq!(hooks.chimes.get(), 1);
        let saved = api.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert!(saved[0].is_reserved("a1"));
        assert!(saved[0].is_reserved("b1"));
    }

    #[tokio::test]
    async fn test_cancelled_prompt_is_a_no_op() {
        let api = Rc::new(FakeApi::with_wishes(sample()));
        let ctl = controller(&api, vec![NamePrompt::Cancelled]);
        ctl.load().await;

        assert_eq!(ctl.toggle_reservation("a1").await, ToggleOutcome::Cancelled);
        assert!(api.saved.borrow().is_empty());
        assert!(!ctl.state().reservations().is_reserved("a1"));
    }

    #[tokio::test]
    async fn test_unreserve_clears_entry_without_prompt() {
        let api = Rc::new(FakeApi::with_wishes(sample()));
        api.reservations
            .borrow_mut()
            .reserve("a2", &ReserverName::parse("Max").unwrap());
        let ctl = controller(&api, vec![]);
        ctl.load().await;

        assert_eq!(ctl.toggle_reservation("a2").await, ToggleOutcome::Released);
        assert!(!api.saved.borrow()[0].is_reserved("a2"));
    }

    #[tokio::test]
    async fn test_failed_save_keeps_optimistic_state() {
        let api = Rc::new(FakeApi::with_wishes(sample()));
        let ctl = controller(
            &api,
            vec![NamePrompt::Confirmed(ReserverName::parse("Jo").unwrap())],
        );
        ctl.load().await;
        *api.fail_next.borrow_mut() = Some(ApiError::Network("offline".to_string()));

        ctl.toggle_reservation("a1").await;
        assert!(ctl.state().reservations().is_reserved("a1"));
    }

    #[tokio::test]
    async fn test_modal_rejects_one_character_name() {
        let api = Rc::new(FakeApi::with_wishes(sample()));
        let modal = Rc::new(RefCell::new(NameModal::new()));
        let ctl = WishlistController::new(
            api.clone(),
            ModalNames(modal.clone()),
            Rc::new(CountingHooks::default()),
        );
        ctl.load().await;

        let user = async {
            while !modal.borrow().is_open() {
                tokio::task::yield_now().await;
            }
            modal.borrow_mut().set_input("A");
            assert!(modal.borrow_mut().submit().is_err());
            assert!(modal.borrow().is_open());
            assert!(api.saved.borrow().is_empty());

            modal.borrow_mut().set_input("Ana");
            modal.borrow_mut().submit().unwrap();
        };
        let (outcome, ()) = tokio::join!(ctl.toggle_reservation("a1"), user);

        assert!(matches!(outcome, ToggleOutcome::Reserved(_)));
        assert_eq!(api.saved.borrow().len(), 1);
        assert_eq!(
            api.saved.borrow()[0].status_line("a1").as_deref(),
            Some("Reserviert von Ana ✔")
        );
    }
}
