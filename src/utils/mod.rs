// Utils compartidos

pub mod leaflet_ffi;
