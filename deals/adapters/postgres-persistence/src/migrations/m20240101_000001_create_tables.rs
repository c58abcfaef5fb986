use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Deals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Deals::DealUniqueId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Deals::OrderingCurrency)
                            .char_len(3)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Deals::ToCurrency).char_len(3).not_null())
                    .col(
                        ColumnDef::new(Deals::DealTimestamp)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Deals::Amount).decimal().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Deals::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Deals {
    Table,
    DealUniqueId,
    OrderingCurrency,
    ToCurrency,
    DealTimestamp,
    Amount,
}
