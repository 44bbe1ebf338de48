/// Source of the anti-forgery token sent with every toggle request.
pub trait CredentialProviderInterface {
    fn token(&self) -> Option<String>;
}
