use thiserror::Error;

/// Local form validation failures. The `Display` text is what the guest sees
/// in the notification toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Introduce tu correo y contraseña.")]
    MissingCredentials,
    #[error("Por favor, completa todos los campos obligatorios (*).")]
    MissingRequiredFields,
    #[error("Los correos electrónicos no coinciden.")]
    EmailMismatch,
    #[error("Las contraseñas no coinciden.")]
    PasswordMismatch,
    #[error("La contraseña debe tener al menos {min} caracteres.")]
    PasswordTooShort { min: usize },
    #[error("Debes aceptar los términos y marcar la casilla de creación de cuenta.")]
    RegistrationConsentMissing,
    #[error("Debes aceptar los términos de privacidad.")]
    PrivacyNotAccepted,
    #[error("Por favor, completa todos los campos obligatorios (Teléfono, Dirección, Ciudad, Código Postal, País).")]
    MissingCheckoutFields,
}

/// Booking flow preconditions that were not met
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Por favor selecciona una fecha de entrada y salida.")]
    IncompleteDateRange,
    #[error("Selecciona una habitación para continuar.")]
    NoRoomSelected,
    #[error("Debes confirmar los detalles y aceptar las condiciones de la reserva.")]
    AcknowledgementsMissing,
    #[error("Por favor, inicie sesión para continuar con su reserva.")]
    NotLoggedIn,
}

/// Session storage failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("session storage is not available")]
    Unavailable,
    #[error("failed to write key `{0}`")]
    Write(String),
    #[error("failed to remove key `{0}`")]
    Remove(String),
    #[error("failed to clear session storage")]
    Clear,
    #[error("stored value for `{key}` is malformed: {reason}")]
    Malformed { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            ValidationError::PasswordTooShort { min: 8 }.to_string(),
            "La contraseña debe tener al menos 8 caracteres."
        );
        assert_eq!(
            BookingError::IncompleteDateRange.to_string(),
            "Por favor selecciona una fecha de entrada y salida."
        );
        assert_eq!(
            StorageError::Write("booking_checkin".to_string()).to_string(),
            "failed to write key `booking_checkin`"
        );
    }
}
