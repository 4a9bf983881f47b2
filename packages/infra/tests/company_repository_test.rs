//! CompanyRepository 統合テスト
//!
//! sqlx::test マクロがテストごとに独立したデータベースを作成し、
//! マイグレーションを適用する。
//!
//! 実行方法:
//! ```bash
//! DATABASE_URL=postgres://localhost/biztime cargo test -p biztime-infra --test company_repository_test
//! ```

mod common;

use biztime_domain::{
   company::{CompanyChanges, CompanyCode, NewCompany},
   industry::IndustryCode,
   invoice::InvoiceId,
};
use biztime_infra::repository::{CompanyRepository, PostgresCompanyRepository};
use common::{count_invoices, seed_companies_and_invoices, seed_industries};
use pretty_assertions::assert_eq;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_allはコード順で全企業を返す(pool: PgPool) {
   seed_companies_and_invoices(&pool).await;
   let sut = PostgresCompanyRepository::new(pool);

   let companies = sut.find_all().await.unwrap();

   let pairs: Vec<(&str, &str)> = companies
      .iter()
      .map(|c| (c.code.as_str(), c.name.as_str()))
      .collect();
   assert_eq!(pairs, vec![("apple", "Apple Computer"), ("ibm", "IBM")]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_detailは請求書idと関連業種を含む(pool: PgPool) {
   let seeded = seed_companies_and_invoices(&pool).await;
   seed_industries(&pool).await;
   let sut = PostgresCompanyRepository::new(pool);

   let detail = sut
      .find_detail(&CompanyCode::new("apple"))
      .await
      .unwrap()
      .unwrap();

   assert_eq!(detail.company.name, "Apple Computer");
   assert_eq!(detail.company.description.as_deref(), Some("Maker of OSX."));
   assert_eq!(
      detail.invoices,
      vec![
         InvoiceId::new(seeded.apple_unpaid),
         InvoiceId::new(seeded.apple_unpaid2),
         InvoiceId::new(seeded.apple_paid),
      ]
   );
   let industries: Vec<&str> = detail.industries.iter().map(|i| i.code.as_str()).collect();
   assert_eq!(industries, vec!["tech"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_detailは他社の請求書を含まない(pool: PgPool) {
   let seeded = seed_companies_and_invoices(&pool).await;
   let sut = PostgresCompanyRepository::new(pool);

   let detail = sut
      .find_detail(&CompanyCode::new("ibm"))
      .await
      .unwrap()
      .unwrap();

   assert_eq!(detail.invoices, vec![InvoiceId::new(seeded.ibm_unpaid)]);
   assert!(detail.industries.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_detailは存在しないコードでnoneを返す(pool: PgPool) {
   let sut = PostgresCompanyRepository::new(pool);

   let detail = sut.find_detail(&CompanyCode::new("nonexistent")).await.unwrap();

   assert!(detail.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_insertはslugを保存して作成行を返す(pool: PgPool) {
   let sut = PostgresCompanyRepository::new(pool.clone());

   let company = sut
      .insert(&NewCompany {
         code:        CompanyCode::new("msft"),
         name:        "Microsoft Corp".to_string(),
         description: Some("Maker of Windows.".to_string()),
      })
      .await
      .unwrap();

   assert_eq!(company.code, CompanyCode::new("msft"));
   assert_eq!(company.name, "Microsoft Corp");
   let slug: String = sqlx::query_scalar("SELECT slug FROM companies WHERE code = 'msft'")
      .fetch_one(&pool)
      .await
      .unwrap();
   assert_eq!(slug, "microsoft-corp");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_insertはアクセント付きの企業名を音訳したslugを保存する(pool: PgPool) {
   let sut = PostgresCompanyRepository::new(pool.clone());

   sut.insert(&NewCompany {
      code:        CompanyCode::new("socgen"),
      name:        "Société Générale".to_string(),
      description: None,
   })
   .await
   .unwrap();

   let slug: String = sqlx::query_scalar("SELECT slug FROM companies WHERE code = 'socgen'")
      .fetch_one(&pool)
      .await
      .unwrap();
   assert_eq!(slug, "societe-generale");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_insertは重複コードでデータベースエラーを返す(pool: PgPool) {
   seed_companies_and_invoices(&pool).await;
   let sut = PostgresCompanyRepository::new(pool);

   let result = sut
      .insert(&NewCompany {
         code:        CompanyCode::new("apple"),
         name:        "Another Apple".to_string(),
         description: None,
      })
      .await;

   let err = result.unwrap_err();
   assert!(
      err.database_message().contains("duplicate key"),
      "一意制約違反のメッセージであること: {}",
      err.database_message()
   );
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_updateは名前と説明とslugを更新する(pool: PgPool) {
   seed_companies_and_invoices(&pool).await;
   let sut = PostgresCompanyRepository::new(pool.clone());

   let company = sut
      .update(
         &CompanyCode::new("apple"),
         &CompanyChanges {
            name:        "Apple".to_string(),
            description: Some("Maker of iPhones.".to_string()),
         },
      )
      .await
      .unwrap()
      .unwrap();

   assert_eq!(company.name, "Apple");
   assert_eq!(company.description.as_deref(), Some("Maker of iPhones."));
   let slug: String = sqlx::query_scalar("SELECT slug FROM companies WHERE code = 'apple'")
      .fetch_one(&pool)
      .await
      .unwrap();
   assert_eq!(slug, "apple");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_updateは存在しないコードでnoneを返す(pool: PgPool) {
   let sut = PostgresCompanyRepository::new(pool);

   let result = sut
      .update(
         &CompanyCode::new("nonexistent"),
         &CompanyChanges {
            name:        "Nonexistent".to_string(),
            description: None,
         },
      )
      .await
      .unwrap();

   assert!(result.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_deleteは請求書と業種関連をカスケード削除する(pool: PgPool) {
   seed_companies_and_invoices(&pool).await;
   seed_industries(&pool).await;
   let sut = PostgresCompanyRepository::new(pool.clone());

   let deleted = sut.delete(&CompanyCode::new("apple")).await.unwrap();

   assert!(deleted);
   assert_eq!(count_invoices(&pool).await, 1);
   let associations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM companies_industries")
      .fetch_one(&pool)
      .await
      .unwrap();
   assert_eq!(associations, 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_deleteは存在しないコードでfalseを返す(pool: PgPool) {
   seed_companies_and_invoices(&pool).await;
   let sut = PostgresCompanyRepository::new(pool.clone());

   let deleted = sut.delete(&CompanyCode::new("nonexistent")).await.unwrap();

   assert!(!deleted);
   assert_eq!(count_invoices(&pool).await, 4);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_add_industryは関連を作成して返す(pool: PgPool) {
   seed_companies_and_invoices(&pool).await;
   seed_industries(&pool).await;
   let sut = PostgresCompanyRepository::new(pool);

   let association = sut
      .add_industry(&CompanyCode::new("ibm"), &IndustryCode::new("tech"))
      .await
      .unwrap();

   assert_eq!(association.company_code, CompanyCode::new("ibm"));
   assert_eq!(association.industry_code, IndustryCode::new("tech"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_add_industryは重複関連でデータベースエラーを返す(pool: PgPool) {
   seed_companies_and_invoices(&pool).await;
   seed_industries(&pool).await;
   let sut = PostgresCompanyRepository::new(pool);

   let result = sut
      .add_industry(&CompanyCode::new("apple"), &IndustryCode::new("tech"))
      .await;

   assert!(result.is_err());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_add_industryは存在しない業種でデータベースエラーを返す(pool: PgPool) {
   seed_companies_and_invoices(&pool).await;
   let sut = PostgresCompanyRepository::new(pool);

   let result = sut
      .add_industry(&CompanyCode::new("apple"), &IndustryCode::new("nope"))
      .await;

   let err = result.unwrap_err();
   assert!(err.database_message().contains("foreign key"));
}
