use thiserror::Error;

/// Erros possíveis na camada de entrada (builder) do parsing de notificações bancárias.
///
/// O núcleo de extração nunca falha por causa do formato dos dados: mensagens
/// irreconhecíveis e linhas malformadas são simplesmente ignoradas.
#[derive(Error, Debug)]
pub enum StatementParseError {
    /// Formato do conteúdo não é suportado pela biblioteca
    #[error("Unsupported file format")]
    UnsupportedFormat,

    /// Erro ao ler o conteúdo do arquivo do disco
    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// O builder foi chamado sem fornecer conteúdo nem caminho de arquivo
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    /// Conteúdo enviado não é UTF-8 válido
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    // ── Erros específicos de CSV ────────────────────────────────────────────────

    /// Cabeçalho do CSV sem a coluna `Content`
    #[error("Missing required column in CSV: content")]
    CsvMissingContentColumn,

    /// Data no formato CSV inválida ou em formato não reconhecido
    #[error("Invalid CSV date format")]
    CsvDateInvalidFormat,
}

/// Alias conveniente para Result com nosso tipo de erro principal
pub type StatementResult<T> = Result<T, StatementParseError>;
