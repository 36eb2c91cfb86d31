//! In-Memory Repositories
//!
//! Test doubles implementing the repository traits over plain vectors. A
//! single [`MemoryStore`] implements all three traits so service and router
//! tests can share one consistent data set. Uniqueness rules mirror the
//! store-level constraints so races that evade the validation pre-checks
//! surface as Conflict here too.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::category::Category;
use crate::models::product::{NewProduct, Product, ProductWithOwner};
use crate::models::user::{NewUser, User};
use crate::repository::{CategoryRepository, ProductRepository, UserRepository};
use crate::utils::error::{messages, ApiError, ApiResult};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    products: Mutex<Vec<Product>>,
    categories: Mutex<Vec<Category>>,
    /// (product_id, category_id) association pairs
    links: Mutex<Vec<(i64, i64)>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Number of stored (product, category) association pairs.
    pub fn link_count(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn all(&self) -> ApiResult<Vec<User>> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn by_id(&self, id: i64) -> ApiResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn by_email(&self, email: &str) -> ApiResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn email_in_use(&self, email: &str, exclude_id: i64) -> ApiResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.id != exclude_id && u.email.eq_ignore_ascii_case(email)))
    }

    async fn insert(&self, user: NewUser) -> ApiResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(ApiError::Conflict(messages::EMAIL_ALREADY_IN_USE.into()));
        }

        let created = User {
            id: self.next_id(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn update(&self, user: &User) -> ApiResult<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users.iter_mut().find(|u| u.id == user.id) {
            *existing = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.users.lock().unwrap().retain(|u| u.id != id);
        // Cascade, mirroring the store schema.
        let removed: Vec<i64> = {
            let mut products = self.products.lock().unwrap();
            let ids = products
                .iter()
                .filter(|p| p.user_id == id)
                .map(|p| p.id)
                .collect();
            products.retain(|p| p.user_id != id);
            ids
        };
        self.links
            .lock()
            .unwrap()
            .retain(|(product_id, _)| !removed.contains(product_id));
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn all_with_owners(&self) -> ApiResult<Vec<ProductWithOwner>> {
        let users = self.users.lock().unwrap();
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter_map(|p| {
                users.iter().find(|u| u.id == p.user_id).map(|owner| ProductWithOwner {
                    product: p.clone(),
                    owner: owner.clone(),
                })
            })
            .collect())
    }

    async fn by_id(&self, id: i64) -> ApiResult<Option<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn by_id_with_owner(&self, id: i64) -> ApiResult<Option<ProductWithOwner>> {
        let product = match ProductRepository::by_id(self, id).await? {
            Some(product) => product,
            None => return Ok(None),
        };
        let owner = self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == product.user_id)
            .cloned();
        Ok(owner.map(|owner| ProductWithOwner { product, owner }))
    }

    async fn by_owner(&self, user_id: i64) -> ApiResult<Vec<Product>> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn by_category_names(&self, names: &[String]) -> ApiResult<Vec<ProductWithOwner>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let categories = self.categories.lock().unwrap();
        let wanted: Vec<i64> = names
            .iter()
            .filter_map(|name| {
                categories
                    .iter()
                    .find(|c| c.name.eq_ignore_ascii_case(name))
                    .map(|c| c.id)
            })
            .collect();
        if wanted.len() != names.len() {
            return Ok(Vec::new());
        }
        drop(categories);

        let links = self.links.lock().unwrap();
        let users = self.users.lock().unwrap();
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                wanted
                    .iter()
                    .all(|cid| links.contains(&(p.id, *cid)))
            })
            .filter_map(|p| {
                users.iter().find(|u| u.id == p.user_id).map(|owner| ProductWithOwner {
                    product: p.clone(),
                    owner: owner.clone(),
                })
            })
            .collect())
    }

    async fn categories_of(&self, product_id: i64) -> ApiResult<Vec<Category>> {
        let links = self.links.lock().unwrap();
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| links.contains(&(product_id, c.id)))
            .cloned()
            .collect())
    }

    async fn insert(&self, product: NewProduct) -> ApiResult<Product> {
        let mut products = self.products.lock().unwrap();
        if products.iter().any(|p| p.name == product.name) {
            return Err(ApiError::Conflict(messages::PRODUCT_NAME_TAKEN.into()));
        }

        let created = Product {
            id: self.next_id(),
            name: product.name,
            price: product.price,
            discount: product.discount,
            user_id: product.user_id,
        };
        products.push(created.clone());
        Ok(created)
    }

    async fn update(&self, product: &Product) -> ApiResult<()> {
        let mut products = self.products.lock().unwrap();
        if let Some(existing) = products.iter_mut().find(|p| p.id == product.id) {
            *existing = product.clone();
        }
        Ok(())
    }

    async fn attach_categories(&self, product_id: i64, category_ids: &[i64]) -> ApiResult<()> {
        let mut links = self.links.lock().unwrap();
        for category_id in category_ids {
            if !links.contains(&(product_id, *category_id)) {
                links.push((product_id, *category_id));
            }
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.products.lock().unwrap().retain(|p| p.id != id);
        self.links
            .lock()
            .unwrap()
            .retain(|(product_id, _)| *product_id != id);
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn all(&self) -> ApiResult<Vec<Category>> {
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn by_id(&self, id: i64) -> ApiResult<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn by_name(&self, name: &str) -> ApiResult<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn name_in_use(&self, name: &str, exclude_id: i64) -> ApiResult<bool> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.id != exclude_id && c.name.eq_ignore_ascii_case(name)))
    }

    async fn insert(&self, name: &str) -> ApiResult<Category> {
        let mut categories = self.categories.lock().unwrap();
        if categories.iter().any(|c| c.name.eq_ignore_ascii_case(name)) {
            return Err(ApiError::Conflict(messages::CATEGORY_ALREADY_EXISTS.into()));
        }

        let created = Category {
            id: self.next_id(),
            name: name.to_string(),
        };
        categories.push(created.clone());
        Ok(created)
    }

    async fn update(&self, category: &Category) -> ApiResult<()> {
        let mut categories = self.categories.lock().unwrap();
        if let Some(existing) = categories.iter_mut().find(|c| c.id == category.id) {
            *existing = category.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.categories.lock().unwrap().retain(|c| c.id != id);
        self.links
            .lock()
            .unwrap()
            .retain(|(_, category_id)| *category_id != id);
        Ok(())
    }
}
