// ============================================================================
// CREATE POINT STATE - Estado de la página de registro
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{CategoryItem, Coordinates};
use crate::viewmodels::{
    DivisionSelector, FormFields, ItemSelection, LocationPicker, RemoteData, SubmissionState,
};

/// Estado de la página "Cadastro do ponto de coleta"
#[derive(Clone)]
pub struct CreatePointState {
    pub items: Rc<RefCell<RemoteData<Vec<CategoryItem>>>>,
    pub selected_items: Rc<RefCell<ItemSelection>>,
    pub divisions: Rc<RefCell<DivisionSelector>>,
    pub location: Rc<RefCell<LocationPicker>>,
    pub fields: Rc<RefCell<FormFields>>,
    pub submission: Rc<RefCell<SubmissionState>>,
    /// Foto del establecimiento (la dropzone conserva la preview)
    pub image: Rc<RefCell<Option<web_sys::File>>>,

    // Reactivity: callbacks para notificar cambios
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl CreatePointState {
    pub fn new(default_center: Coordinates) -> Self {
        Self {
            items: Rc::new(RefCell::new(RemoteData::NotAsked)),
            selected_items: Rc::new(RefCell::new(ItemSelection::new())),
            divisions: Rc::new(RefCell::new(DivisionSelector::new())),
            location: Rc::new(RefCell::new(LocationPicker::new(default_center))),
            fields: Rc::new(RefCell::new(FormFields::default())),
            submission: Rc::new(RefCell::new(SubmissionState::Idle)),
            image: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Quitar todos los subscribers (desmontaje de la vista)
    pub fn clear_subscribers(&self) {
        self.change_subscribers.borrow_mut().clear();
    }

    /// Notificar a todos los subscribers
    pub fn notify_changes(&self) {
        // Copia para que un subscriber pueda suscribir a otro sin doble borrow
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission.borrow().clone()
    }

    pub fn set_submission(&self, state: SubmissionState) {
        *self.submission.borrow_mut() = state;
        self.notify_changes();
    }
}
