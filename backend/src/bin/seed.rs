//! Database seeding
//!
//! Wipes every table and loads a small JSONPlaceholder-style data set.
//! The first user is an administrator:
//! `Sincere@april.biz` / `password123`.

use anyhow::Result;
use placeholder_api_backend::{
    auth::PasswordService,
    config::{AppConfig, DatabaseConfig},
    db,
    repositories::{
        AlbumRepository, CommentRepository, CreatePhoto, CreateUser, PhotoRepository,
        PostRepository, TodoRepository, UserRepository,
    },
};
use placeholder_api_shared::{Address, Company, Geo, Role};
use sqlx::PgPool;
use tracing::info;

const SEED_PASSWORD: &str = "password123";

struct SeedUser {
    name: &'static str,
    username: &'static str,
    email: &'static str,
    phone: &'static str,
    website: &'static str,
    role: Role,
    street: &'static str,
    suite: &'static str,
    city: &'static str,
    zipcode: &'static str,
    lat: &'static str,
    lng: &'static str,
    company: &'static str,
    catch_phrase: &'static str,
    bs: &'static str,
}

const USERS: &[SeedUser] = &[
    SeedUser {
        name: "Leanne Graham",
        username: "Bret",
        email: "Sincere@april.biz",
        phone: "1-770-736-8031 x56442",
        website: "hildegard.org",
        role: Role::Admin,
        street: "Kulas Light",
        suite: "Apt. 556",
        city: "Gwenborough",
        zipcode: "92998-3874",
        lat: "-37.3159",
        lng: "81.1496",
        company: "Romaguera-Crona",
        catch_phrase: "Multi-layered client-server neural-net",
        bs: "harness real-time e-markets",
    },
    SeedUser {
        name: "Ervin Howell",
        username: "Antonette",
        email: "Shanna@melissa.tv",
        phone: "010-692-6593 x09125",
        website: "anastasia.net",
        role: Role::User,
        street: "Victor Plains",
        suite: "Suite 879",
        city: "Wisokyburgh",
        zipcode: "90566-7771",
        lat: "-43.9509",
        lng: "-34.4618",
        company: "Deckow-Crist",
        catch_phrase: "Proactive didactic contingency",
        bs: "synergize scalable supply-chains",
    },
    SeedUser {
        name: "Clementine Bauch",
        username: "Samantha",
        email: "Nathan@yesenia.net",
        phone: "1-463-123-4447",
        website: "ramiro.info",
        role: Role::User,
        street: "Douglas Extension",
        suite: "Suite 847",
        city: "McKenziehaven",
        zipcode: "59590-4157",
        lat: "-68.6102",
        lng: "-47.0653",
        company: "Romaguera-Jacobson",
        catch_phrase: "Face to face bifurcated interface",
        bs: "e-enable strategic applications",
    },
    SeedUser {
        name: "Patricia Lebsack",
        username: "Karianne",
        email: "Julianne.OConner@kory.org",
        phone: "493-170-9623 x156",
        website: "kale.biz",
        role: Role::User,
        street: "Hoeger Mall",
        suite: "Apt. 692",
        city: "South Elvis",
        zipcode: "53919-4257",
        lat: "29.4572",
        lng: "-164.2990",
        company: "Robel-Corkery",
        catch_phrase: "Multi-tiered zero tolerance productivity",
        bs: "transition cutting-edge web services",
    },
    SeedUser {
        name: "Chelsey Dietrich",
        username: "Kamren",
        email: "Lucio_Hettinger@annie.ca",
        phone: "(254)954-1289",
        website: "demarco.info",
        role: Role::User,
        street: "Skiles Walks",
        suite: "Suite 351",
        city: "Roscoeview",
        zipcode: "33263",
        lat: "-31.8129",
        lng: "62.5342",
        company: "Keebler LLC",
        catch_phrase: "User-centric fault-tolerant solution",
        bs: "revolutionize end-to-end systems",
    },
];

/// (title, body)
const POSTS: &[(&str, &str)] = &[
    (
        "sunt aut facere repellat provident occaecati excepturi optio reprehenderit",
        "quia et suscipit\nsuscipit recusandae consequuntur expedita et cum\nreprehenderit molestiae ut ut quas totam\nnostrum rerum est autem sunt rem eveniet architecto",
    ),
    (
        "qui est esse",
        "est rerum tempore vitae\nsequi sint nihil reprehenderit dolor beatae ea dolores neque\nfugiat blanditiis voluptate porro vel nihil molestiae ut reiciendis\nqui aperiam non debitis possimus qui neque nisi nulla",
    ),
    (
        "ea molestias quasi exercitationem repellat qui ipsa sit aut",
        "et iusto sed quo iure\nvoluptatem occaecati omnis eligendi aut ad\nvoluptatem doloribus vel accusantium quis pariatur\nmolestiae porro eius odio et labore et velit aut",
    ),
];

/// (name, email, body)
const COMMENTS: &[(&str, &str, &str)] = &[
    (
        "id labore ex et quam laborum",
        "Eliseo@gardner.biz",
        "laudantium enim quasi est quidem magnam voluptate ipsam eos\ntempora quo necessitatibus\ndolor quam autem quasi\nreiciendis et nam sapiente accusantium",
    ),
    (
        "quo vero reiciendis velit similique earum",
        "Jayne_Kuhic@sydney.com",
        "est natus enim nihil est dolore omnis voluptatem numquam\net omnis occaecati quod ullam at\nvoluptatem error expedita pariatur\nnihil sint nostrum voluptatem reiciendis et",
    ),
];

const ALBUMS: &[&str] = &[
    "quidem molestiae enim",
    "sunt qui excepturi placeat culpa",
    "omnis laborum odio",
];

/// (title, url, thumbnail_url)
const PHOTOS: &[(&str, &str, &str)] = &[
    (
        "accusamus beatae ad facilis cum similique qui sunt",
        "https://via.placeholder.com/600/92c952",
        "https://via.placeholder.com/150/92c952",
    ),
    (
        "reprehenderit est deserunt velit ipsam",
        "https://via.placeholder.com/600/771796",
        "https://via.placeholder.com/150/771796",
    ),
];

/// (title, completed)
const TODOS: &[(&str, bool)] = &[
    ("delectus aut autem", false),
    ("quis ut nam facilis et officia qui", false),
    ("fugiat veniam minus", false),
    ("et porro tempora", true),
];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,placeholder_api_backend=info".into()),
        )
        .init();

    let config = AppConfig::load()?;
    let pool = db::connect(&DatabaseConfig {
        max_connections: 2,
        min_connections: 1,
        ..config.database.clone()
    })
    .await?;
    db::run_migrations(&pool).await?;

    let passwords = PasswordService::new(config.auth.bcrypt_cost);
    seed(&pool, &passwords).await?;

    info!(
        email = USERS[0].email,
        password = SEED_PASSWORD,
        "Seeding complete; admin credentials"
    );
    Ok(())
}

async fn seed(pool: &PgPool, passwords: &PasswordService) -> Result<()> {
    info!("Clearing existing data");
    sqlx::query("TRUNCATE users, posts, comments, albums, photos, todos, addresses, companies RESTART IDENTITY CASCADE")
        .execute(pool)
        .await?;

    let password_hash = passwords.hash_async(SEED_PASSWORD.to_string()).await?;

    let mut user_ids = Vec::with_capacity(USERS.len());
    for user in USERS {
        let id = UserRepository::create(
            pool,
            CreateUser {
                name: user.name.to_string(),
                username: user.username.to_string(),
                email: user.email.to_string(),
                password_hash: password_hash.clone(),
                phone: Some(user.phone.to_string()),
                website: Some(user.website.to_string()),
                role: user.role,
                address: Some(Address {
                    street: user.street.to_string(),
                    suite: user.suite.to_string(),
                    city: user.city.to_string(),
                    zipcode: user.zipcode.to_string(),
                    geo: Some(Geo {
                        lat: user.lat.to_string(),
                        lng: user.lng.to_string(),
                    }),
                }),
                company: Some(Company {
                    name: user.company.to_string(),
                    catch_phrase: user.catch_phrase.to_string(),
                    bs: user.bs.to_string(),
                }),
            },
        )
        .await?;
        user_ids.push(id);
    }
    info!(count = user_ids.len(), "Created users");

    let mut post_ids = Vec::with_capacity(POSTS.len());
    for (i, (title, body)) in POSTS.iter().enumerate() {
        let owner = user_ids[i % user_ids.len()];
        post_ids.push(PostRepository::create(pool, owner, title, body).await?);
    }
    info!(count = post_ids.len(), "Created posts");

    for (i, (name, email, body)) in COMMENTS.iter().enumerate() {
        let post_id = post_ids[i % post_ids.len()];
        CommentRepository::create(pool, post_id, name, email, body).await?;
    }
    info!(count = COMMENTS.len(), "Created comments");

    let mut album_ids = Vec::with_capacity(ALBUMS.len());
    for (i, title) in ALBUMS.iter().enumerate() {
        let owner = user_ids[i % user_ids.len()];
        album_ids.push(AlbumRepository::create(pool, owner, title).await?);
    }
    info!(count = album_ids.len(), "Created albums");

    for (i, (title, url, thumbnail_url)) in PHOTOS.iter().enumerate() {
        PhotoRepository::create(
            pool,
            CreatePhoto {
                album_id: album_ids[i % album_ids.len()],
                title,
                url,
                thumbnail_url,
            },
        )
        .await?;
    }
    info!(count = PHOTOS.len(), "Created photos");

    for (i, (title, completed)) in TODOS.iter().enumerate() {
        let owner = user_ids[i % user_ids.len()];
        TodoRepository::create(pool, owner, title, *completed).await?;
    }
    info!(count = TODOS.len(), "Created todos");

    Ok(())
}
