pub mod remote;
pub mod item_selection;
pub mod division_selector;
pub mod location_picker;
pub mod dropzone_viewmodel;
pub mod create_point_viewmodel;

pub use remote::RemoteData;
pub use item_selection::ItemSelection;
pub use division_selector::{DivisionSelector, SubRegionTicket};
pub use location_picker::LocationPicker;
pub use dropzone_viewmodel::{DropzoneViewModel, ObjectUrlStore, PreviewFile};
pub use create_point_viewmodel::{CreatePointViewModel, FormFields, SubmissionState, SubmitOutcome};
