mod director;
mod genre;
mod movie;

pub use director::DirectorRepo;
pub use genre::GenreRepo;
pub use movie::MovieRepo;
