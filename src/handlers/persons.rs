//! 인물 HTTP 핸들러
//!
//! `/api/v1/persons` 스코프에 등록됩니다. 목록 조회는 검색 후 정렬하며,
//! 적용된 검색/정렬 상태를 응답에 함께 담습니다.

use actix_web::{web, HttpResponse, delete, get, post, put};
use uuid::Uuid;
use crate::core::errors::AppError;
use crate::domain::dto::persons::{
    search_fields, PersonAddRequest, PersonUpdateRequest, PersonsIndexQuery, PersonsIndexResponse,
};
use crate::services::persons::PersonsService;

#[get("")]
pub async fn list_persons(
    service: web::Data<PersonsService>,
    query: web::Query<PersonsIndexQuery>,
) -> Result<HttpResponse, AppError> {
    let PersonsIndexQuery {
        search_by,
        search_string,
        sort_by,
        sort_order,
    } = query.into_inner();

    let persons = service
        .get_searched_persons(search_by.as_deref().unwrap_or_default(), search_string.as_deref())
        .await?;
    let persons = service.get_sorted_persons(persons, &sort_by, sort_order);

    Ok(HttpResponse::Ok().json(PersonsIndexResponse {
        persons,
        current_search_by: search_by,
        current_search_string: search_string,
        current_sort_by: sort_by,
        current_sort_order: sort_order,
    }))
}

#[get("/search-fields")]
pub async fn list_search_fields() -> HttpResponse {
    HttpResponse::Ok().json(search_fields())
}

#[post("")]
pub async fn create_person(
    service: web::Data<PersonsService>,
    payload: web::Json<PersonAddRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.add_person(Some(payload.into_inner())).await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("/{person_id}")]
pub async fn get_person(
    service: web::Data<PersonsService>,
    person_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let person_id = person_id.into_inner();
    let person = service
        .get_person_by_id(Some(person_id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("인물을 찾을 수 없습니다: {}", person_id)))?;

    Ok(HttpResponse::Ok().json(person))
}

/// 경로의 ID가 본문의 `id`보다 우선합니다.
#[put("/{person_id}")]
pub async fn update_person(
    service: web::Data<PersonsService>,
    person_id: web::Path<Uuid>,
    payload: web::Json<PersonUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let mut request = payload.into_inner();
    request.id = Some(person_id.into_inner());

    let response = service.update_person(Some(request)).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/{person_id}")]
pub async fn delete_person(
    service: web::Data<PersonsService>,
    person_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let person_id = person_id.into_inner();

    if !service.delete_person(Some(person_id)).await? {
        return Err(AppError::NotFound(format!("인물을 찾을 수 없습니다: {}", person_id)));
    }

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};
    use uuid::Uuid;
    use crate::domain::dto::countries::{CountryAddRequest, CountryResponse};
    use crate::domain::dto::persons::{PersonResponse, PersonsIndexResponse, SearchFieldResponse};
    use crate::domain::enums::SortOrderOptions;
    use crate::repositories::memory::{MemoryCountriesRepository, MemoryPersonsRepository, MemoryStore};
    use crate::routes::configure_all_routes;
    use crate::services::{CountriesService, PersonsService};

    async fn services() -> (Arc<CountriesService>, Arc<PersonsService>, CountryResponse) {
        let store = Arc::new(MemoryStore::new());
        let countries = Arc::new(CountriesService::new(Arc::new(
            MemoryCountriesRepository::new(store.clone()),
        )));
        let persons = Arc::new(PersonsService::new(Arc::new(MemoryPersonsRepository::new(store))));
        let norway = countries
            .add_country(Some(CountryAddRequest::new("Norway")))
            .await
            .unwrap();
        (countries, persons, norway)
    }

    fn person_json(name: &str, email: &str, country_id: Uuid) -> Value {
        json!({
            "name": name,
            "email": email,
            "date_of_birth": "1990-05-20",
            "gender": "Female",
            "country_id": country_id,
            "address": "Storgata 1",
            "receive_news_letters": true,
        })
    }

    #[actix_web::test]
    async fn test_person_lifecycle() {
        let (countries, persons, norway) = services().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(countries))
                .app_data(web::Data::from(persons))
                .configure(configure_all_routes),
        )
        .await;

        // create
        let req = test::TestRequest::post()
            .uri("/api/v1/persons")
            .set_json(person_json("Ingrid", "ingrid@example.com", norway.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: PersonResponse = test::read_body_json(resp).await;
        assert_eq!(created.country_name.as_deref(), Some("Norway"));

        // update, path id wins over body id
        let mut body = person_json("Ingrid", "ingrid@norway.no", norway.id);
        body["id"] = json!(Uuid::new_v4());
        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/persons/{}", created.id))
            .set_json(body)
            .to_request();
        let updated: PersonResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.email, "ingrid@norway.no");

        // get
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/persons/{}", created.id))
            .to_request();
        let fetched: PersonResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, updated);

        // delete twice
        for expected in [StatusCode::NO_CONTENT, StatusCode::NOT_FOUND] {
            let req = test::TestRequest::delete()
                .uri(&format!("/api/v1/persons/{}", created.id))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }
    }

    #[actix_web::test]
    async fn test_index_searches_then_sorts() {
        let (countries, persons, norway) = services().await;
        for (name, email) in [
            ("aKevin", "kevin@fake.org"),
            ("cJill", "jill@fake.org"),
            ("bNora", "nora@real.org"),
        ] {
            persons
                .add_person(Some(serde_json::from_value(person_json(name, email, norway.id)).unwrap()))
                .await
                .unwrap();
        }

        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(countries))
                .app_data(web::Data::from(persons))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/persons?searchBy=Email&searchString=fake&sortBy=Name&sortOrder=DESC")
            .to_request();
        let index: PersonsIndexResponse = test::call_and_read_body_json(&app, req).await;

        let names: Vec<&str> = index.persons.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["cJill", "aKevin"]);
        assert_eq!(index.current_search_by.as_deref(), Some("Email"));
        assert_eq!(index.current_sort_order, SortOrderOptions::Desc);

        let req = test::TestRequest::get().uri("/api/v1/persons").to_request();
        let index: PersonsIndexResponse = test::call_and_read_body_json(&app, req).await;
        let names: Vec<&str> = index.persons.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["aKevin", "bNora", "cJill"]);
        assert_eq!(index.current_sort_by, "Name");
    }

    #[actix_web::test]
    async fn test_index_accepts_any_sort_order() {
        let (countries, persons, norway) = services().await;
        for (name, email) in [
            ("bNora", "nora@example.com"),
            ("aKevin", "kevin@example.com"),
            ("cJill", "jill@example.com"),
        ] {
            persons
                .add_person(Some(serde_json::from_value(person_json(name, email, norway.id)).unwrap()))
                .await
                .unwrap();
        }

        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(countries))
                .app_data(web::Data::from(persons))
                .configure(configure_all_routes),
        )
        .await;

        let cases = [
            ("/api/v1/persons?sortOrder=desc", vec!["cJill", "bNora", "aKevin"], SortOrderOptions::Desc),
            ("/api/v1/persons?sortOrder=foo", vec!["aKevin", "bNora", "cJill"], SortOrderOptions::Asc),
            // 알 수 없는 정렬 필드는 저장 순서 그대로
            ("/api/v1/persons?sortBy=Bogus&sortOrder=DESC", vec!["bNora", "aKevin", "cJill"], SortOrderOptions::Desc),
        ];

        for (uri, expected, order) in cases {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", uri);

            let index: PersonsIndexResponse = test::read_body_json(resp).await;
            let names: Vec<&str> = index.persons.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(names, expected, "{}", uri);
            assert_eq!(index.current_sort_order, order, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_search_fields() {
        let (countries, persons, _) = services().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(countries))
                .app_data(web::Data::from(persons))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/v1/persons/search-fields")
            .to_request();
        let fields: Vec<SearchFieldResponse> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(fields.len(), 5);
        assert_eq!(fields[2].field, "DateOfBirth");
        assert_eq!(fields[2].label, "Birthday Date");
    }

    #[actix_web::test]
    async fn test_error_statuses() {
        let (countries, persons, norway) = services().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(countries))
                .app_data(web::Data::from(persons))
                .configure(configure_all_routes),
        )
        .await;

        // invalid email → 400
        let req = test::TestRequest::post()
            .uri("/api/v1/persons")
            .set_json(person_json("Ola", "not-an-email", norway.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "Validation error: 'Email' value should be a valid email"
        );

        // update of unknown id → 404
        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/persons/{}", Uuid::new_v4()))
            .set_json(person_json("Ola", "ola@example.com", norway.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // malformed body → 400
        let req = test::TestRequest::post()
            .uri("/api/v1/persons")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
