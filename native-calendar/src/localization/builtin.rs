use crate::localization::{Locale, Names};

impl Locale {
    /// Spanish names, used by default.
    pub const ES: Self = Self {
        months: [
            Names::from_static("Ene", "Enero"),
            Names::from_static("Feb", "Febrero"),
            Names::from_static("Mar", "Marzo"),
            Names::from_static("Abr", "Abril"),
            Names::from_static("May", "Mayo"),
            Names::from_static("Jun", "Junio"),
            Names::from_static("Jul", "Julio"),
            Names::from_static("Ago", "Agosto"),
            Names::from_static("Sep", "Septiembre"),
            Names::from_static("Oct", "Octubre"),
            Names::from_static("Nov", "Noviembre"),
            Names::from_static("Dic", "Diciembre"),
        ],
        days: [
            Names::from_static("Dom", "Domingo"),
            Names::from_static("Lun", "Lunes"),
            Names::from_static("Mar", "Martes"),
            Names::from_static("Mie", "Miercoles"),
            Names::from_static("Jue", "Jueves"),
            Names::from_static("Vie", "Viernes"),
            Names::from_static("Sab", "Sabado"),
        ],
    };

    /// English names.
    pub const EN: Self = Self {
        months: [
            Names::from_static("Jan", "January"),
            Names::from_static("Feb", "February"),
            Names::from_static("Mar", "March"),
            Names::from_static("Apr", "April"),
            Names::from_static("May", "May"),
            Names::from_static("Jun", "June"),
            Names::from_static("Jul", "July"),
            Names::from_static("Aug", "August"),
            Names::from_static("Sep", "September"),
            Names::from_static("Oct", "October"),
            Names::from_static("Nov", "November"),
            Names::from_static("Dec", "December"),
        ],
        days: [
            Names::from_static("Sun", "Sunday"),
            Names::from_static("Mon", "Monday"),
            Names::from_static("Tue", "Tuesday"),
            Names::from_static("Wed", "Wednesday"),
            Names::from_static("Thu", "Thursday"),
            Names::from_static("Fri", "Friday"),
            Names::from_static("Sat", "Saturday"),
        ],
    };
}
