// ============================================================================
// CREATE POINT VIEWMODEL - Orquestador del formulario de registro
// ============================================================================
// Dueño del estado del formulario. Recibe los clientes inyectados, lanza las
// cargas de montaje (items, UFs, geolocalización), encadena la carga de
// municipios a la UF elegida y ejecuta el envío:
//
//   Idle -> Submitting -> Succeeded
//                      -> Failed -> Idle (dismiss / edición / reenvío)
// ============================================================================

use std::future::Future;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::error::{AppError, ValidationError};
use crate::models::{is_placeholder, Coordinates, CreatePointRequest};
use crate::services::{
    ApiClient, BrowserGeolocation, DivisionsApi, GeolocationProvider, IbgeClient, ItemsApi,
    PointsApi,
};
use crate::state::CreatePointState;
use crate::viewmodels::{DivisionSelector, ItemSelection, LocationPicker, RemoteData, SubRegionTicket};

/// Campos de texto del formulario
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub contact: String,
}

impl FormFields {
    /// Handler genérico nombre/valor. Devuelve false si el campo no existe.
    pub fn set(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "contact" | "whatsapp" | "Whatsapp" => &mut self.contact,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

/// Estado del envío
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed(AppError),
}

impl SubmissionState {
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionState::Submitting | SubmissionState::Succeeded)
    }
}

/// Resultado de un submit que no falló
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    /// Ya había un envío en curso o terminado
    Ignored,
}

/// Valida y arma el cuerpo de `POST /points`
pub fn build_payload(
    fields: &FormFields,
    divisions: &DivisionSelector,
    location: &LocationPicker,
    selection: &ItemSelection,
) -> Result<CreatePointRequest, ValidationError> {
    let name = fields.name.trim();
    let email = fields.email.trim();
    let contact = fields.contact.trim();

    if name.is_empty() {
        return Err(ValidationError::MissingField("name"));
    }
    if email.is_empty() {
        return Err(ValidationError::MissingField("email"));
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if contact.is_empty() {
        return Err(ValidationError::MissingField("contact"));
    }
    if is_placeholder(divisions.selected_region()) {
        return Err(ValidationError::RegionNotSelected);
    }
    if is_placeholder(divisions.selected_sub_region()) {
        return Err(ValidationError::SubRegionNotSelected);
    }
    if !location.has_selection() {
        return Err(ValidationError::LocationNotSelected);
    }
    if selection.is_empty() {
        return Err(ValidationError::NoItemsSelected);
    }

    Ok(CreatePointRequest {
        name: name.to_string(),
        email: email.to_string(),
        contact: contact.to_string(),
        region: divisions.selected_region().to_string(),
        sub_region: divisions.selected_sub_region().to_string(),
        latitude: location.selected.latitude,
        longitude: location.selected.longitude,
        items: selection.ids().to_vec(),
    })
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((user, domain)) => !user.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[derive(Clone)]
pub struct CreatePointViewModel {
    items_api: Rc<dyn ItemsApi>,
    divisions_api: Rc<dyn DivisionsApi>,
    points_api: Rc<dyn PointsApi>,
    geolocation: Rc<dyn GeolocationProvider>,
    state: CreatePointState,
}

impl CreatePointViewModel {
    pub fn new(
        items_api: Rc<dyn ItemsApi>,
        divisions_api: Rc<dyn DivisionsApi>,
        points_api: Rc<dyn PointsApi>,
        geolocation: Rc<dyn GeolocationProvider>,
        state: CreatePointState,
    ) -> Self {
        Self {
            items_api,
            divisions_api,
            points_api,
            geolocation,
            state,
        }
    }

    /// ViewModel con los clientes reales del navegador
    pub fn browser() -> Self {
        let api = Rc::new(ApiClient::new());
        Self::new(
            api.clone(),
            Rc::new(IbgeClient::new()),
            api,
            Rc::new(BrowserGeolocation::new()),
            CreatePointState::new(CONFIG.map_config.default_center()),
        )
    }

    pub fn state(&self) -> &CreatePointState {
        &self.state
    }

    // ------------------------------------------------------------------------
    // Montaje: tres cargas independientes
    // ------------------------------------------------------------------------

    /// Lanza items, UFs y geolocalización en paralelo, sin orden entre ellas
    pub async fn mount(&self) {
        log::info!("🚀 Montando formulario de registro");
        futures::join!(self.load_items(), self.load_regions(), self.locate_user());
    }

    pub async fn load_items(&self) {
        *self.state.items.borrow_mut() = RemoteData::Loading;
        self.state.notify_changes();

        let result = self.items_api.fetch_items().await;
        if let Err(e) = &result {
            log::error!("❌ Error cargando categorías: {}", e);
        }
        *self.state.items.borrow_mut() = RemoteData::from_result(result);
        self.state.notify_changes();
    }

    pub async fn load_regions(&self) {
        self.state.divisions.borrow_mut().start_loading_regions();
        self.state.notify_changes();

        let result = self.divisions_api.fetch_regions().await;
        if let Err(e) = &result {
            log::error!("❌ Error cargando UFs: {}", e);
        }
        self.state.divisions.borrow_mut().apply_regions(result);
        self.state.notify_changes();
    }

    /// "Tentar novamente" de la grilla de items
    pub fn retry_items(&self) -> impl Future<Output = ()> + 'static {
        let vm = self.clone();
        async move { vm.load_items().await }
    }

    pub fn retry_regions(&self) -> impl Future<Output = ()> + 'static {
        let vm = self.clone();
        async move { vm.load_regions().await }
    }

    pub async fn locate_user(&self) {
        let result = self.geolocation.current_position().await;
        self.state.location.borrow_mut().apply_geolocation(result);
        self.state.notify_changes();
    }

    // ------------------------------------------------------------------------
    // UF -> municipios
    // ------------------------------------------------------------------------

    /// Registra la UF ya mismo y devuelve la carga de municipios a ejecutar
    pub fn change_region(&self, value: &str) -> impl Future<Output = ()> + 'static {
        let ticket = self.state.divisions.borrow_mut().select_region(value);
        self.clear_failure();
        self.state.notify_changes();

        let vm = self.clone();
        async move {
            if let Some(ticket) = ticket {
                vm.load_sub_regions(ticket).await;
            }
        }
    }

    /// Vuelve a pedir los municipios de la UF actual
    pub fn retry_sub_regions(&self) -> impl Future<Output = ()> + 'static {
        let ticket = self.state.divisions.borrow_mut().retry_ticket();
        self.state.notify_changes();

        let vm = self.clone();
        async move {
            if let Some(ticket) = ticket {
                vm.load_sub_regions(ticket).await;
            }
        }
    }

    async fn load_sub_regions(&self, ticket: SubRegionTicket) {
        let result = self.divisions_api.fetch_sub_regions(&ticket.region).await;
        if let Err(e) = &result {
            log::error!("❌ Error cargando municipios de {}: {}", ticket.region, e);
        }
        let applied = self
            .state
            .divisions
            .borrow_mut()
            .apply_sub_regions(&ticket, result);
        if applied {
            self.state.notify_changes();
        }
    }

    pub fn select_sub_region(&self, value: &str) {
        self.state.divisions.borrow_mut().select_sub_region(value);
        self.clear_failure();
        self.state.notify_changes();
    }

    // ------------------------------------------------------------------------
    // Ediciones del usuario
    // ------------------------------------------------------------------------

    pub fn update_field(&self, field: &str, value: &str) {
        if !self.state.fields.borrow_mut().set(field, value) {
            log::warn!("⚠️ Campo desconocido ignorado: {}", field);
            return;
        }
        self.clear_failure();
        self.state.notify_changes();
    }

    pub fn select_position(&self, position: Coordinates) {
        self.state.location.borrow_mut().select(position);
        self.clear_failure();
        self.state.notify_changes();
    }

    pub fn toggle_item(&self, id: u32) {
        let selected = self.state.selected_items.borrow_mut().toggle(id);
        log::info!("♻️ Item {} {}", id, if selected { "seleccionado" } else { "deseleccionado" });
        self.clear_failure();
        self.state.notify_changes();
    }

    pub fn attach_image(&self, file: web_sys::File) {
        *self.state.image.borrow_mut() = Some(file);
        self.state.notify_changes();
    }

    // ------------------------------------------------------------------------
    // Envío
    // ------------------------------------------------------------------------

    pub fn build_payload(&self) -> Result<CreatePointRequest, ValidationError> {
        build_payload(
            &self.state.fields.borrow(),
            &self.state.divisions.borrow(),
            &self.state.location.borrow(),
            &self.state.selected_items.borrow(),
        )
    }

    pub async fn submit(&self) -> Result<SubmitOutcome, AppError> {
        if self.state.submission().is_busy() {
            log::warn!("⚠️ Envío ya en curso, submit ignorado");
            return Ok(SubmitOutcome::Ignored);
        }

        let payload = match self.build_payload() {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("⚠️ Formulario inválido: {}", e);
                let error = AppError::Validation(e);
                self.state.set_submission(SubmissionState::Failed(error.clone()));
                return Err(error);
            }
        };

        self.state.set_submission(SubmissionState::Submitting);
        match self.points_api.create_point(&payload).await {
            Ok(()) => {
                self.state.set_submission(SubmissionState::Succeeded);
                Ok(SubmitOutcome::Created)
            }
            Err(e) => {
                log::error!("❌ Error creando punto de coleta: {}", e);
                self.state.set_submission(SubmissionState::Failed(e.clone()));
                Err(e)
            }
        }
    }

    /// Failed -> Idle
    pub fn dismiss_failure(&self) {
        if self.clear_failure() {
            self.state.notify_changes();
        }
    }

    fn clear_failure(&self) -> bool {
        let mut submission = self.state.submission.borrow_mut();
        if matches!(*submission, SubmissionState::Failed(_)) {
            *submission = SubmissionState::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::future::{FutureExt, LocalBoxFuture};
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;
    use std::collections::HashMap;

    use crate::models::CategoryItem;

    // ------------------------------------------------------------------------
    // Fakes
    // ------------------------------------------------------------------------

    struct FakeItems(Result<Vec<CategoryItem>, AppError>);

    impl ItemsApi for FakeItems {
        fn fetch_items(&self) -> LocalBoxFuture<'_, Result<Vec<CategoryItem>, AppError>> {
            let result = self.0.clone();
            async move { result }.boxed_local()
        }
    }

    #[derive(Default)]
    struct FakeDivisions {
        cities: HashMap<String, Vec<String>>,
        calls: RefCell<Vec<String>>,
    }

    impl DivisionsApi for FakeDivisions {
        fn fetch_regions(&self) -> LocalBoxFuture<'_, Result<Vec<String>, AppError>> {
            let mut regions: Vec<String> = self.cities.keys().cloned().collect();
            regions.sort();
            async move { Ok(regions) }.boxed_local()
        }

        fn fetch_sub_regions<'a>(
            &'a self,
            region: &'a str,
        ) -> LocalBoxFuture<'a, Result<Vec<String>, AppError>> {
            self.calls.borrow_mut().push(region.to_string());
            let result = self.cities.get(region).cloned().unwrap_or_default();
            async move { Ok(result) }.boxed_local()
        }
    }

    /// Municipios que responden cuando el test lo decide
    #[derive(Default)]
    struct ManualDivisions {
        pending: RefCell<Vec<(String, oneshot::Sender<Vec<String>>)>>,
    }

    impl ManualDivisions {
        fn respond(&self, region: &str, cities: &[&str]) {
            let mut pending = self.pending.borrow_mut();
            let pos = pending.iter().position(|(r, _)| r == region).unwrap();
            let (_, tx) = pending.remove(pos);
            tx.send(cities.iter().map(|s| s.to_string()).collect()).unwrap();
        }
    }

    impl DivisionsApi for ManualDivisions {
        fn fetch_regions(&self) -> LocalBoxFuture<'_, Result<Vec<String>, AppError>> {
            async { Ok(vec!["RJ".to_string(), "SP".to_string()]) }.boxed_local()
        }

        fn fetch_sub_regions<'a>(
            &'a self,
            region: &'a str,
        ) -> LocalBoxFuture<'a, Result<Vec<String>, AppError>> {
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().push((region.to_string(), tx));
            async move { rx.await.map_err(|_| AppError::Network("cancelled".into())) }.boxed_local()
        }
    }

    #[derive(Default)]
    struct FakePoints {
        fail_with: RefCell<Option<AppError>>,
        requests: RefCell<Vec<CreatePointRequest>>,
        /// Si está presente, la respuesta espera a que el test la libere
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl PointsApi for FakePoints {
        fn create_point<'a>(
            &'a self,
            request: &'a CreatePointRequest,
        ) -> LocalBoxFuture<'a, Result<(), AppError>> {
            self.requests.borrow_mut().push(request.clone());
            let result = match self.fail_with.borrow().clone() {
                Some(e) => Err(e),
                None => Ok(()),
            };
            let gate = self.gate.borrow_mut().take();
            async move {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                result
            }
            .boxed_local()
        }
    }

    struct FakeGeolocation(Result<Coordinates, AppError>);

    impl GeolocationProvider for FakeGeolocation {
        fn current_position(&self) -> LocalBoxFuture<'_, Result<Coordinates, AppError>> {
            let result = self.0.clone();
            async move { result }.boxed_local()
        }
    }

    fn catalog() -> Vec<CategoryItem> {
        (1..=6)
            .map(|id| CategoryItem {
                id,
                title: format!("Item {}", id),
                image_url: format!("http://localhost:3333/uploads/{}.svg", id),
            })
            .collect()
    }

    fn divisions() -> Rc<FakeDivisions> {
        let mut cities = HashMap::new();
        cities.insert("SP".to_string(), vec!["Campinas".to_string(), "São Paulo".to_string()]);
        cities.insert("RJ".to_string(), vec!["Niterói".to_string()]);
        Rc::new(FakeDivisions {
            cities,
            calls: RefCell::new(Vec::new()),
        })
    }

    fn viewmodel_with(
        divisions: Rc<dyn DivisionsApi>,
        points: Rc<FakePoints>,
        geolocation: Result<Coordinates, AppError>,
    ) -> CreatePointViewModel {
        CreatePointViewModel::new(
            Rc::new(FakeItems(Ok(catalog()))),
            divisions,
            points,
            Rc::new(FakeGeolocation(geolocation)),
            CreatePointState::new(Coordinates::ORIGIN),
        )
    }

    fn fill_acme(vm: &CreatePointViewModel) {
        vm.update_field("name", "Acme");
        vm.update_field("email", "a@acme.com");
        vm.update_field("contact", "11999999999");
        block_on(vm.change_region("SP"));
        vm.select_sub_region("São Paulo");
        vm.select_position(Coordinates::new(-23.5, -46.6));
        vm.toggle_item(1);
        vm.toggle_item(3);
    }

    // ------------------------------------------------------------------------
    // Tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_mount_loads_everything_independently() {
        let points = Rc::new(FakePoints::default());
        let vm = viewmodel_with(divisions(), points, Ok(Coordinates::new(-22.9, -43.2)));

        block_on(vm.mount());

        let state = vm.state();
        assert_eq!(state.items.borrow().value().map(Vec::len), Some(6));
        assert_eq!(state.divisions.borrow().region_options(), &["RJ", "SP"]);
        assert_eq!(
            state.location.borrow().initial_center,
            Coordinates::new(-22.9, -43.2)
        );
    }

    #[test]
    fn test_failed_items_load_is_kept_for_retry() {
        let vm = CreatePointViewModel::new(
            Rc::new(FakeItems(Err(AppError::Network("offline".into())))),
            divisions(),
            Rc::new(FakePoints::default()),
            Rc::new(FakeGeolocation(Err(AppError::PermissionDenied))),
            CreatePointState::new(Coordinates::new(-15.79, -47.88)),
        );

        block_on(vm.mount());

        let state = vm.state();
        assert!(state.items.borrow().error().map(AppError::is_retryable).unwrap_or(false));
        // ubicación denegada: se queda el centro por defecto
        assert_eq!(
            state.location.borrow().initial_center,
            Coordinates::new(-15.79, -47.88)
        );
        // el resto de la página sigue cargada
        assert_eq!(state.divisions.borrow().region_options().len(), 2);
    }

    #[test]
    fn test_region_change_fetches_once_per_change_and_never_for_placeholder() {
        let divisions = divisions();
        let vm = viewmodel_with(divisions.clone(), Rc::new(FakePoints::default()), Err(AppError::PermissionDenied));

        block_on(vm.change_region("0"));
        assert!(divisions.calls.borrow().is_empty());

        block_on(vm.change_region("SP"));
        assert_eq!(*divisions.calls.borrow(), vec!["SP".to_string()]);

        block_on(vm.change_region("0"));
        assert_eq!(divisions.calls.borrow().len(), 1);

        block_on(vm.change_region("RJ"));
        assert_eq!(*divisions.calls.borrow(), vec!["SP".to_string(), "RJ".to_string()]);
        assert_eq!(vm.state().divisions.borrow().sub_region_options(), &["Niterói"]);
    }

    #[test]
    fn test_late_response_for_previous_region_is_discarded() {
        let divisions = Rc::new(ManualDivisions::default());
        let vm = viewmodel_with(divisions.clone(), Rc::new(FakePoints::default()), Err(AppError::PermissionDenied));
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        spawner.spawn_local(vm.change_region("SP")).unwrap();
        pool.run_until_stalled();
        spawner.spawn_local(vm.change_region("RJ")).unwrap();
        pool.run_until_stalled();

        divisions.respond("RJ", &["Niterói"]);
        pool.run_until_stalled();
        divisions.respond("SP", &["Campinas"]);
        pool.run_until_stalled();

        let state = vm.state().divisions.borrow().clone();
        assert_eq!(state.selected_region(), "RJ");
        assert_eq!(state.sub_region_options(), &["Niterói"]);
    }

    #[test]
    fn test_region_change_clears_stale_sub_region() {
        let vm = viewmodel_with(divisions(), Rc::new(FakePoints::default()), Err(AppError::PermissionDenied));
        block_on(vm.change_region("SP"));
        vm.select_sub_region("Campinas");

        block_on(vm.change_region("RJ"));
        assert_eq!(vm.state().divisions.borrow().selected_sub_region(), "0");
    }

    #[test]
    fn test_submit_sends_exact_payload() {
        let points = Rc::new(FakePoints::default());
        let vm = viewmodel_with(divisions(), points.clone(), Err(AppError::PermissionDenied));
        fill_acme(&vm);

        let outcome = block_on(vm.submit()).unwrap();
        assert_eq!(outcome, SubmitOutcome::Created);
        assert_eq!(vm.state().submission(), SubmissionState::Succeeded);

        let requests = points.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0],
            CreatePointRequest {
                name: "Acme".to_string(),
                email: "a@acme.com".to_string(),
                contact: "11999999999".to_string(),
                region: "SP".to_string(),
                sub_region: "São Paulo".to_string(),
                latitude: -23.5,
                longitude: -46.6,
                items: vec![1, 3],
            }
        );

        let json = serde_json::to_value(&requests[0]).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["contact", "email", "items", "latitude", "longitude", "name", "region", "sub_region"]
        );
    }

    #[test]
    fn test_submit_after_success_is_ignored() {
        let points = Rc::new(FakePoints::default());
        let vm = viewmodel_with(divisions(), points.clone(), Err(AppError::PermissionDenied));
        fill_acme(&vm);

        block_on(vm.submit()).unwrap();
        assert_eq!(block_on(vm.submit()).unwrap(), SubmitOutcome::Ignored);
        assert_eq!(points.requests.borrow().len(), 1);
    }

    #[test]
    fn test_submit_while_submitting_is_ignored() {
        let points = Rc::new(FakePoints::default());
        let (release, gate) = oneshot::channel();
        *points.gate.borrow_mut() = Some(gate);
        let vm = viewmodel_with(divisions(), points.clone(), Err(AppError::PermissionDenied));
        fill_acme(&vm);

        let outcomes = Rc::new(RefCell::new(Vec::new()));
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        for _ in 0..2 {
            let vm = vm.clone();
            let outcomes = outcomes.clone();
            spawner
                .spawn_local(async move {
                    let outcome = vm.submit().await;
                    outcomes.borrow_mut().push(outcome);
                })
                .unwrap();
        }
        pool.run_until_stalled();

        // la primera petición sigue pendiente; la segunda no salió
        assert_eq!(vm.state().submission(), SubmissionState::Submitting);
        assert_eq!(points.requests.borrow().len(), 1);
        assert_eq!(*outcomes.borrow(), vec![Ok(SubmitOutcome::Ignored)]);

        release.send(()).unwrap();
        pool.run_until_stalled();

        assert_eq!(vm.state().submission(), SubmissionState::Succeeded);
        assert_eq!(points.requests.borrow().len(), 1);
        assert_eq!(
            *outcomes.borrow(),
            vec![Ok(SubmitOutcome::Ignored), Ok(SubmitOutcome::Created)]
        );
    }

    #[test]
    fn test_validation_blocks_network_call() {
        let points = Rc::new(FakePoints::default());
        let vm = viewmodel_with(divisions(), points.clone(), Err(AppError::PermissionDenied));
        fill_acme(&vm);
        vm.update_field("email", "   ");

        let err = block_on(vm.submit()).unwrap_err();
        assert_eq!(err, AppError::Validation(ValidationError::MissingField("email")));
        assert!(points.requests.borrow().is_empty());
        assert!(matches!(vm.state().submission(), SubmissionState::Failed(_)));

        // editar el formulario vuelve a Idle
        vm.update_field("email", "a@acme.com");
        assert_eq!(vm.state().submission(), SubmissionState::Idle);
    }

    #[test]
    fn test_failed_request_can_be_dismissed_and_retried() {
        let points = Rc::new(FakePoints::default());
        *points.fail_with.borrow_mut() = Some(AppError::Http {
            status: 500,
            message: "Internal Server Error".into(),
        });
        let vm = viewmodel_with(divisions(), points.clone(), Err(AppError::PermissionDenied));
        fill_acme(&vm);

        let err = block_on(vm.submit()).unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(vm.state().submission(), SubmissionState::Failed(err));

        vm.dismiss_failure();
        assert_eq!(vm.state().submission(), SubmissionState::Idle);

        *points.fail_with.borrow_mut() = None;
        assert_eq!(block_on(vm.submit()).unwrap(), SubmitOutcome::Created);
        assert_eq!(points.requests.borrow().len(), 2);
    }

    #[test]
    fn test_map_click_changes_only_selected_position() {
        let vm = viewmodel_with(divisions(), Rc::new(FakePoints::default()), Err(AppError::PermissionDenied));
        block_on(vm.mount());
        let location_before = *vm.state().location.borrow();
        let fields_before = vm.state().fields.borrow().clone();
        let divisions_before = vm.state().divisions.borrow().clone();
        let items_before = vm.state().selected_items.borrow().clone();

        vm.select_position(Coordinates::new(10.0, 20.0));

        let state = vm.state();
        assert_eq!(state.location.borrow().selected, Coordinates::new(10.0, 20.0));
        assert_eq!(state.location.borrow().initial_center, location_before.initial_center);
        assert_eq!(*state.fields.borrow(), fields_before);
        assert_eq!(*state.divisions.borrow(), divisions_before);
        assert_eq!(*state.selected_items.borrow(), items_before);
    }

    #[test]
    fn test_generic_field_handler() {
        let mut fields = FormFields::default();
        assert!(fields.set("name", "Acme"));
        assert!(fields.set("Whatsapp", "11999999999"));
        assert!(!fields.set("password", "secret"));
        assert_eq!(fields.contact, "11999999999");
    }

    #[test]
    fn test_payload_validation_order() {
        let mut divisions = DivisionSelector::new();
        let mut location = LocationPicker::default();
        let mut selection = ItemSelection::new();
        let mut fields = FormFields::default();

        assert_eq!(
            build_payload(&fields, &divisions, &location, &selection),
            Err(ValidationError::MissingField("name"))
        );
        fields.set("name", "  Acme ");
        fields.set("email", "acme.com");
        assert_eq!(
            build_payload(&fields, &divisions, &location, &selection),
            Err(ValidationError::InvalidEmail)
        );
        fields.set("email", " a@acme.com");
        assert_eq!(
            build_payload(&fields, &divisions, &location, &selection),
            Err(ValidationError::MissingField("contact"))
        );
        fields.set("contact", " 1199 ");
        assert_eq!(
            build_payload(&fields, &divisions, &location, &selection),
            Err(ValidationError::RegionNotSelected)
        );

        assert!(divisions.select_region("SP").is_some());
        assert_eq!(
            build_payload(&fields, &divisions, &location, &selection),
            Err(ValidationError::SubRegionNotSelected)
        );
        divisions.select_sub_region("São Paulo");
        assert_eq!(
            build_payload(&fields, &divisions, &location, &selection),
            Err(ValidationError::LocationNotSelected)
        );
        location.select(Coordinates::new(-23.5, -46.6));
        assert_eq!(
            build_payload(&fields, &divisions, &location, &selection),
            Err(ValidationError::NoItemsSelected)
        );
        selection.toggle(2);

        let payload = build_payload(&fields, &divisions, &location, &selection).unwrap();
        assert_eq!(payload.name, "Acme");
        assert_eq!(payload.email, "a@acme.com");
        assert_eq!(payload.contact, "1199");
        assert_eq!(payload.region, "SP");
        assert_eq!(payload.sub_region, "São Paulo");
        assert_eq!(payload.items, vec![2]);
    }
}
